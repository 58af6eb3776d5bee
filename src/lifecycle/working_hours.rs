//! Working-hour and overtime computation.
//!
//! Hours are always recomputed from the check-in/check-out timestamps;
//! callers never supply them. Quantities are decimal hours rounded to two
//! places.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Computes the working hours between check-in and check-out, net of the
/// unpaid break.
///
/// The caller is responsible for ensuring `check_out` is after `check_in`
/// and that the break does not consume the whole interval; the attendance
/// transition validates both before calling.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use lifecycle_engine::lifecycle::working_hours;
/// use rust_decimal::Decimal;
///
/// let check_in = NaiveDateTime::parse_from_str("2026-03-09 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let check_out = NaiveDateTime::parse_from_str("2026-03-09 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(working_hours(check_in, check_out, 30), Decimal::new(80, 1)); // 8.0
/// ```
pub fn working_hours(check_in: NaiveDateTime, check_out: NaiveDateTime, break_minutes: u32) -> Decimal {
    let worked_minutes = (check_out - check_in).num_minutes() - i64::from(break_minutes);

    (Decimal::new(worked_minutes, 0) / Decimal::new(60, 0)).round_dp(2)
}

/// Computes the overtime hours beyond the standard shift length.
///
/// Returns zero when the working hours do not exceed the standard shift.
pub fn overtime_hours(working_hours: Decimal, standard_shift_hours: Decimal) -> Decimal {
    (working_hours - standard_shift_hours).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_8_hour_day_no_break() {
        let hours = working_hours(
            make_datetime("2026-03-09", "09:00:00"),
            make_datetime("2026-03-09", "17:00:00"),
            0,
        );
        assert_eq!(hours, dec("8"));
    }

    #[test]
    fn test_break_is_subtracted() {
        let hours = working_hours(
            make_datetime("2026-03-09", "09:00:00"),
            make_datetime("2026-03-09", "17:30:00"),
            30,
        );
        assert_eq!(hours, dec("8"));
    }

    #[test]
    fn test_partial_hours_round_to_two_places() {
        // 09:05 to 13:00 is 235 minutes = 3.9166... hours
        let hours = working_hours(
            make_datetime("2026-03-09", "09:05:00"),
            make_datetime("2026-03-09", "13:00:00"),
            0,
        );
        assert_eq!(hours, dec("3.92"));
    }

    #[test]
    fn test_overnight_session() {
        let hours = working_hours(
            make_datetime("2026-03-09", "22:00:00"),
            make_datetime("2026-03-10", "06:00:00"),
            0,
        );
        assert_eq!(hours, dec("8"));
    }

    #[test]
    fn test_no_overtime_at_standard_length() {
        assert_eq!(overtime_hours(dec("8"), dec("8")), Decimal::ZERO);
    }

    #[test]
    fn test_no_overtime_below_standard_length() {
        assert_eq!(overtime_hours(dec("3.92"), dec("8")), Decimal::ZERO);
    }

    #[test]
    fn test_overtime_beyond_standard_length() {
        assert_eq!(overtime_hours(dec("10.5"), dec("8")), dec("2.5"));
    }
}
