//! Read-time attendance status derivation.
//!
//! Status is a pure function over the stored timestamps, the shift
//! configuration, and the current instant. It is never persisted, so it
//! cannot drift from the raw facts it summarizes.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::config::ShiftConfig;
use crate::models::{AttendanceRecord, AttendanceStatus};

/// Derives the attendance status for one employee-day.
///
/// `record` is `None` for days that never saw a check-in; such a day reads
/// as [`AttendanceStatus::Absent`] once it has fully elapsed and
/// [`AttendanceStatus::NotStarted`] before that.
///
/// For checked-in days:
/// - once checked out, working hours below the half-day threshold yield
///   [`AttendanceStatus::HalfDay`], taking precedence over Late/Present
///   because short days change downstream pay handling;
/// - otherwise a check-in within `shift_start + grace_minutes` is
///   [`AttendanceStatus::Present`], and anything later is
///   [`AttendanceStatus::Late`].
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
/// use lifecycle_engine::config::ShiftConfig;
/// use lifecycle_engine::lifecycle::derive_status;
/// use lifecycle_engine::models::AttendanceStatus;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftConfig {
///     shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     grace_minutes: 15,
///     standard_shift_hours: Decimal::new(8, 0),
///     half_day_threshold_hours: Decimal::new(4, 0),
///     standard_break_minutes: 30,
/// };
/// let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
/// let now = NaiveDateTime::parse_from_str("2026-03-09 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// // A day with no record and time left reads as not started.
/// assert_eq!(derive_status(None, date, &shift, now), AttendanceStatus::NotStarted);
/// ```
pub fn derive_status(
    record: Option<&AttendanceRecord>,
    date: NaiveDate,
    shift: &ShiftConfig,
    now: NaiveDateTime,
) -> AttendanceStatus {
    let Some((record, check_in)) = record.and_then(|r| r.check_in.map(|ci| (r, ci))) else {
        // No check-in: absent once the day has fully elapsed.
        if date < now.date() {
            return AttendanceStatus::Absent;
        }
        return AttendanceStatus::NotStarted;
    };

    // The half-day condition takes precedence once the day is closed.
    if record.check_out.is_some() && record.working_hours < shift.half_day_threshold_hours {
        return AttendanceStatus::HalfDay;
    }

    let on_time_deadline =
        date.and_time(shift.shift_start) + Duration::minutes(i64::from(shift.grace_minutes));

    if check_in <= on_time_deadline {
        AttendanceStatus::Present
    } else {
        AttendanceStatus::Late
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn shift() -> ShiftConfig {
        ShiftConfig {
            shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            grace_minutes: 15,
            standard_shift_hours: Decimal::new(8, 0),
            half_day_threshold_hours: Decimal::new(4, 0),
            standard_break_minutes: 30,
        }
    }

    fn record(check_in: &str, check_out: Option<&str>, working_hours: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date: make_date("2026-03-09"),
            check_in: Some(make_datetime("2026-03-09", check_in)),
            check_out: check_out.map(|t| make_datetime("2026-03-09", t)),
            location: Location::Office,
            notes: None,
            break_minutes: 0,
            working_hours: Decimal::from_str(working_hours).unwrap(),
            overtime_hours: Decimal::ZERO,
        }
    }

    #[test]
    fn test_no_record_same_day_is_not_started() {
        let now = make_datetime("2026-03-09", "12:00:00");
        let status = derive_status(None, make_date("2026-03-09"), &shift(), now);
        assert_eq!(status, AttendanceStatus::NotStarted);
    }

    #[test]
    fn test_no_record_elapsed_day_is_absent() {
        let now = make_datetime("2026-03-10", "08:00:00");
        let status = derive_status(None, make_date("2026-03-09"), &shift(), now);
        assert_eq!(status, AttendanceStatus::Absent);
    }

    #[test]
    fn test_check_in_within_grace_is_present() {
        let now = make_datetime("2026-03-09", "12:00:00");
        let record = record("09:05:00", None, "0");
        let status = derive_status(Some(&record), make_date("2026-03-09"), &shift(), now);
        assert_eq!(status, AttendanceStatus::Present);
    }

    #[test]
    fn test_check_in_at_grace_boundary_is_present() {
        let now = make_datetime("2026-03-09", "12:00:00");
        let record = record("09:15:00", None, "0");
        let status = derive_status(Some(&record), make_date("2026-03-09"), &shift(), now);
        assert_eq!(status, AttendanceStatus::Present);
    }

    #[test]
    fn test_check_in_after_grace_is_late() {
        let now = make_datetime("2026-03-09", "12:00:00");
        let record = record("09:16:00", None, "0");
        let status = derive_status(Some(&record), make_date("2026-03-09"), &shift(), now);
        assert_eq!(status, AttendanceStatus::Late);
    }

    #[test]
    fn test_short_closed_day_is_half_day() {
        // Checked in on time, but checked out after 3.92 hours.
        let now = make_datetime("2026-03-09", "18:00:00");
        let record = record("09:05:00", Some("13:00:00"), "3.92");
        let status = derive_status(Some(&record), make_date("2026-03-09"), &shift(), now);
        assert_eq!(status, AttendanceStatus::HalfDay);
    }

    #[test]
    fn test_half_day_takes_precedence_over_late() {
        let now = make_datetime("2026-03-09", "18:00:00");
        let record = record("10:30:00", Some("13:30:00"), "3");
        let status = derive_status(Some(&record), make_date("2026-03-09"), &shift(), now);
        assert_eq!(status, AttendanceStatus::HalfDay);
    }

    #[test]
    fn test_full_closed_day_keeps_present() {
        let now = make_datetime("2026-03-09", "18:00:00");
        let record = record("09:00:00", Some("17:30:00"), "8");
        let status = derive_status(Some(&record), make_date("2026-03-09"), &shift(), now);
        assert_eq!(status, AttendanceStatus::Present);
    }

    #[test]
    fn test_open_short_day_is_not_half_day_yet() {
        // Still checked in; the half-day rule applies only once checked out.
        let now = make_datetime("2026-03-09", "10:00:00");
        let record = record("09:05:00", None, "0");
        let status = derive_status(Some(&record), make_date("2026-03-09"), &shift(), now);
        assert_eq!(status, AttendanceStatus::Present);
    }
}
