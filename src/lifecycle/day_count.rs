//! Leave day counting.
//!
//! The day count of a leave request is fixed at submission time: the
//! inclusive date range, minus configured weekend days, minus organization
//! holidays. The holiday calendar is an external collaborator consumed
//! through [`HolidayCalendar`].

use chrono::{Duration, NaiveDate};

use crate::config::HolidayCalendar;

/// Counts the working days in an inclusive date range.
///
/// Weekend days and organization holidays are excluded. A range made up
/// entirely of non-working days counts zero; the submit transition rejects
/// such a request.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use lifecycle_engine::config::ConfigLoader;
/// use lifecycle_engine::lifecycle::count_working_days;
///
/// let loader = ConfigLoader::load("./config/hr-portal").unwrap();
/// // Monday through Friday of one week
/// let days = count_working_days(
///     NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 13).unwrap(),
///     loader.calendar(),
/// );
/// assert_eq!(days, 5);
/// ```
pub fn count_working_days(
    start_date: NaiveDate,
    end_date: NaiveDate,
    calendar: &HolidayCalendar,
) -> u32 {
    let mut days = 0;
    let mut current = start_date;

    while current <= end_date {
        if calendar.is_working_day(current) {
            days += 1;
        }
        current += Duration::days(1);
    }

    days
}
