//! Core data models for the Lifecycle Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod actor;
mod attendance;
mod balance;
mod leave;

pub use actor::{Actor, Role};
pub use attendance::{AttendanceRecord, AttendanceStatus, Location};
pub use balance::{LeaveBalance, LeaveTypeBalance};
pub use leave::{LeaveDecision, LeaveRequest, LeaveStatus, LeaveType};
