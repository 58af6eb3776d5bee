//! Attendance state transitions.
//!
//! One record per employee per calendar day, moving `NotStarted -> Open ->
//! Closed`. The transitions here are pure: they take the stored record (if
//! any) and produce the mutated record or an error, without touching
//! storage. The gateway owns loading, per-key serialization, and the
//! commit.

use chrono::NaiveDateTime;

use crate::config::ShiftConfig;
use crate::error::{EngineError, EngineResult};
use crate::lifecycle::working_hours::{overtime_hours, working_hours};
use crate::models::{AttendanceRecord, Location};
use rust_decimal::Decimal;

/// Opens the day's attendance record with a check-in.
///
/// The record is created lazily here on the first check-in of the day.
///
/// # Errors
///
/// Returns `AlreadyCheckedIn` when the day's record already has a
/// check-in. The engine never silently no-ops a duplicate check-in;
/// idempotent callers detect the error and treat it as success-equivalent.
pub fn check_in(
    existing: Option<&AttendanceRecord>,
    employee_id: &str,
    at: NaiveDateTime,
    location: Location,
    notes: Option<String>,
) -> EngineResult<AttendanceRecord> {
    if let Some(record) = existing {
        if record.check_in.is_some() {
            return Err(EngineError::AlreadyCheckedIn {
                employee_id: employee_id.to_string(),
                date: record.date,
            });
        }
    }

    Ok(AttendanceRecord {
        employee_id: employee_id.to_string(),
        date: at.date(),
        check_in: Some(at),
        check_out: None,
        location,
        notes,
        break_minutes: 0,
        working_hours: Decimal::ZERO,
        overtime_hours: Decimal::ZERO,
    })
}

/// Closes the day's attendance record with a check-out.
///
/// Recomputes `working_hours` (net of the break) and `overtime_hours`
/// from the two timestamps. The break defaults to the shift
/// configuration's standard break when the caller does not report one.
///
/// # Errors
///
/// - `NoOpenSession` when the day has no check-in, or is already closed.
/// - `InvalidOrder` when the check-out is not after the check-in, or the
///   break consumes the whole interval (working hours must end up
///   strictly positive).
pub fn check_out(
    existing: Option<AttendanceRecord>,
    employee_id: &str,
    at: NaiveDateTime,
    break_minutes: Option<u32>,
    notes: Option<String>,
    shift: &ShiftConfig,
) -> EngineResult<AttendanceRecord> {
    let mut record = match existing {
        Some(record) if record.is_open() => record,
        _ => {
            return Err(EngineError::NoOpenSession {
                employee_id: employee_id.to_string(),
                date: at.date(),
            });
        }
    };

    let check_in = record.check_in.expect("open record has a check-in");
    if at <= check_in {
        return Err(EngineError::InvalidOrder {
            message: format!("check-out at {} is not after check-in at {}", at, check_in),
        });
    }

    let break_minutes = break_minutes.unwrap_or(shift.standard_break_minutes);
    let worked_minutes = (at - check_in).num_minutes() - i64::from(break_minutes);
    if worked_minutes <= 0 {
        return Err(EngineError::InvalidOrder {
            message: format!(
                "a break of {} minutes leaves no working time between {} and {}",
                break_minutes, check_in, at
            ),
        });
    }

    record.check_out = Some(at);
    record.break_minutes = break_minutes;
    if notes.is_some() {
        record.notes = notes;
    }
    record.working_hours = working_hours(check_in, at, break_minutes);
    record.overtime_hours = overtime_hours(record.working_hours, shift.standard_shift_hours);

    Ok(record)
}
