//! Configuration types for the Lifecycle Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. The source code the
//! portal grew out of hinted at several inconsistent grace and half-day
//! thresholds; here they are explicit configuration inputs rather than
//! hard-coded values.

use chrono::{NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use crate::models::LeaveType;

/// Metadata about the portal deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalMetadata {
    /// The human-readable name of the portal.
    pub name: String,
    /// The employing organization's timezone, informational only; all
    /// instants handled by the engine are already org-local.
    pub timezone: String,
    /// Days of the week that are not working days.
    pub weekend_days: Vec<Weekday>,
}

/// Working-day timing for a department (or the organization default).
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftConfig {
    /// When the shift starts.
    pub shift_start: NaiveTime,
    /// Minutes after shift start during which a check-in is still on time.
    pub grace_minutes: u32,
    /// Hours of a standard shift; work beyond this counts as overtime.
    pub standard_shift_hours: Decimal,
    /// Working hours below this threshold make a checked-out day a half day.
    pub half_day_threshold_hours: Decimal,
    /// Break minutes assumed when the employee does not report one.
    pub standard_break_minutes: u32,
}

/// Shift configuration file structure: an organization default plus
/// per-department overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsConfig {
    /// The fallback configuration for departments without an override.
    pub default: ShiftConfig,
    /// Per-department overrides, keyed by department name.
    #[serde(default)]
    pub departments: HashMap<String, ShiftConfig>,
}

/// Allocation rules for one leave type.
#[derive(Debug, Clone, Deserialize)]
pub struct LeavePolicy {
    /// Days allocated per period.
    pub allocated_days: i64,
    /// When true, submissions skip the balance check entirely. Used for
    /// leave types like emergency leave that must never be blocked.
    #[serde(default)]
    pub unbounded: bool,
}

/// Leave policy file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LeavePolicyConfig {
    /// Map of leave type to its policy.
    pub policies: HashMap<LeaveType, LeavePolicy>,
}

/// An organization holiday.
#[derive(Debug, Clone, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// Holiday file for one calendar year.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The year the file covers.
    pub year: i32,
    /// The holidays in that year.
    pub holidays: Vec<Holiday>,
}

/// The merged working-day calendar: weekend days plus all loaded holidays.
///
/// Built by the loader from the portal metadata and the per-year holiday
/// files; consulted by the leave day counter and exposed to callers that
/// need to label days.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    weekend_days: Vec<Weekday>,
    holiday_dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Builds a calendar from weekend days and holiday files.
    pub fn new(weekend_days: Vec<Weekday>, files: &[HolidayFile]) -> Self {
        let holiday_dates = files
            .iter()
            .flat_map(|f| f.holidays.iter().map(|h| h.date))
            .collect();
        Self {
            weekend_days,
            holiday_dates,
        }
    }

    /// Returns true if the date is an organization holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_dates.contains(&date)
    }

    /// Returns true if the date falls on a configured weekend day.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        use chrono::Datelike;
        self.weekend_days.contains(&date.weekday())
    }

    /// Returns true if the date is neither a weekend day nor a holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }
}

/// The complete portal configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    metadata: PortalMetadata,
    shifts: ShiftsConfig,
    policies: HashMap<LeaveType, LeavePolicy>,
    calendar: HolidayCalendar,
}

impl PortalConfig {
    /// Creates a new PortalConfig from its component parts.
    pub fn new(
        metadata: PortalMetadata,
        shifts: ShiftsConfig,
        policies: HashMap<LeaveType, LeavePolicy>,
        holiday_files: Vec<HolidayFile>,
    ) -> Self {
        let calendar = HolidayCalendar::new(metadata.weekend_days.clone(), &holiday_files);
        Self {
            metadata,
            shifts,
            policies,
            calendar,
        }
    }

    /// Returns the portal metadata.
    pub fn metadata(&self) -> &PortalMetadata {
        &self.metadata
    }

    /// Returns the shift configuration tables.
    pub fn shifts(&self) -> &ShiftsConfig {
        &self.shifts
    }

    /// Returns all leave policies.
    pub fn policies(&self) -> &HashMap<LeaveType, LeavePolicy> {
        &self.policies
    }

    /// Returns the merged working-day calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn calendar_with_new_year() -> HolidayCalendar {
        HolidayCalendar::new(
            vec![Weekday::Sat, Weekday::Sun],
            &[HolidayFile {
                year: 2026,
                holidays: vec![Holiday {
                    date: make_date("2026-01-01"),
                    name: "New Year's Day".to_string(),
                }],
            }],
        )
    }

    #[test]
    fn test_calendar_detects_holiday() {
        let calendar = calendar_with_new_year();
        assert!(calendar.is_holiday(make_date("2026-01-01")));
        assert!(!calendar.is_holiday(make_date("2026-01-02")));
    }

    #[test]
    fn test_calendar_detects_weekend() {
        let calendar = calendar_with_new_year();
        // 2026-01-03 is a Saturday, 2026-01-04 a Sunday
        assert!(calendar.is_weekend(make_date("2026-01-03")));
        assert!(calendar.is_weekend(make_date("2026-01-04")));
        assert!(!calendar.is_weekend(make_date("2026-01-05")));
    }

    #[test]
    fn test_working_day_excludes_weekends_and_holidays() {
        let calendar = calendar_with_new_year();
        assert!(!calendar.is_working_day(make_date("2026-01-01"))); // holiday
        assert!(!calendar.is_working_day(make_date("2026-01-03"))); // Saturday
        assert!(calendar.is_working_day(make_date("2026-01-02"))); // Friday
    }
}
