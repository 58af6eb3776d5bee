//! Attendance record model and related types.
//!
//! One [`AttendanceRecord`] exists per employee per calendar day. The record
//! stores only raw facts (timestamps, location, break minutes); the status is
//! never stored and is derived at read time by [`crate::lifecycle::derive_status`]
//! so it cannot drift from the timestamps it summarizes.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where the employee worked from on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// On-site at the office.
    #[default]
    Office,
    /// Working remotely.
    Remote,
    /// On field duty.
    Field,
}

/// The derived status of an attendance day.
///
/// Derived, never persisted. The half-day condition takes precedence over
/// Late/Present once the day is checked out and hours fall short, because it
/// changes downstream pay handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// No check-in yet and the day has not fully elapsed.
    NotStarted,
    /// Checked in within the grace period.
    Present,
    /// Checked in after the grace period expired.
    Late,
    /// Checked out with fewer working hours than the half-day threshold.
    HalfDay,
    /// The day fully elapsed without a check-in.
    Absent,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::NotStarted => write!(f, "not_started"),
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Late => write!(f, "late"),
            AttendanceStatus::HalfDay => write!(f, "half_day"),
            AttendanceStatus::Absent => write!(f, "absent"),
        }
    }
}

/// One employee's attendance facts for one calendar day.
///
/// Created lazily on the first check-in of the day, mutated once by
/// check-out, and never deleted. `working_hours` and `overtime_hours` are
/// always recomputed from the two timestamps; callers never supply them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day, in the employing organization's timezone.
    pub date: NaiveDate,
    /// When the employee checked in.
    pub check_in: Option<NaiveDateTime>,
    /// When the employee checked out.
    pub check_out: Option<NaiveDateTime>,
    /// Where the employee worked from.
    pub location: Location,
    /// Free-form notes attached at check-in or check-out.
    pub notes: Option<String>,
    /// Unpaid break minutes subtracted from the working hours.
    pub break_minutes: u32,
    /// Hours worked, net of the break. Zero until checked out.
    pub working_hours: Decimal,
    /// Hours worked beyond the standard shift. Zero until checked out.
    pub overtime_hours: Decimal,
}

impl AttendanceRecord {
    /// Returns true if the day has a check-in but no check-out yet.
    pub fn is_open(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_none()
    }

    /// Returns true if the day has both a check-in and a check-out.
    pub fn is_closed(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }
}
