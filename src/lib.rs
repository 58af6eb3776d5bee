//! Attendance and Leave Lifecycle Engine for the HR portal.
//!
//! This crate owns the stateful core of the portal: daily attendance records
//! opened and closed by check-in/check-out requests, and leave requests moving
//! through an approval lifecycle that consumes a per-employee leave-balance
//! ledger. Status values are derived from timestamps and shift configuration
//! at read time rather than stored.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod ledger;
pub mod lifecycle;
pub mod models;
