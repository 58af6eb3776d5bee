//! Business rules for the Lifecycle Engine.
//!
//! This module contains the pure transition and derivation logic: opening
//! and closing attendance records, deriving attendance status from shift
//! configuration, counting leave days net of weekends and holidays, and
//! moving leave requests through submit, decide, and cancel while keeping
//! the balance ledger consistent. Nothing here touches storage; the
//! gateway loads entities, calls these functions, and commits the result.

mod attendance;
mod day_count;
mod leave;
mod status;
mod working_hours;

pub use attendance::{check_in, check_out};
pub use day_count::count_working_days;
pub use leave::{cancel, decide, submit};
pub use status::derive_status;
pub use working_hours::{overtime_hours, working_hours};
