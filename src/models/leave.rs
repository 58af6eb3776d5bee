//! Leave request model and related types.
//!
//! A [`LeaveRequest`] moves through the approval lifecycle
//! `Pending -> {Approved, Rejected, Cancelled}`. The day count is fixed at
//! submission time and never recomputed afterwards; the `version` token
//! guards decisions against concurrent HR actors.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The categories of leave an employee can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Annual (vacation) leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Casual leave for short personal matters.
    Casual,
    /// Maternity leave.
    Maternity,
    /// Paternity leave.
    Paternity,
    /// Emergency leave; typically configured as unbounded.
    Emergency,
}

impl LeaveType {
    /// All leave types, in the order they are reported to callers.
    pub const ALL: [LeaveType; 6] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Casual,
        LeaveType::Maternity,
        LeaveType::Paternity,
        LeaveType::Emergency,
    ];
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveType::Annual => write!(f, "annual"),
            LeaveType::Sick => write!(f, "sick"),
            LeaveType::Casual => write!(f, "casual"),
            LeaveType::Maternity => write!(f, "maternity"),
            LeaveType::Paternity => write!(f, "paternity"),
            LeaveType::Emergency => write!(f, "emergency"),
        }
    }
}

/// The lifecycle state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted, awaiting an HR decision.
    Pending,
    /// Approved; the requested days are consumed from the ledger.
    Approved,
    /// Rejected; no balance was consumed.
    Rejected,
    /// Cancelled by the employee or an admin.
    Cancelled,
}

impl LeaveStatus {
    /// Returns true for states that permit no further transition.
    ///
    /// `Approved` is terminal except for the cancel-before-start-date
    /// exception, which [`crate::lifecycle::cancel`] handles explicitly.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
            LeaveStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// The decision an HR actor can take on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDecision {
    /// Approve the request and consume the reserved days.
    Approved,
    /// Reject the request and release the reserved days.
    Rejected,
}

/// A leave request and its lifecycle bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: Uuid,
    /// The employee the leave is for.
    pub employee_id: String,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Working days in the range, net of weekends and organization holidays.
    /// Fixed at submission; never recomputed after approval.
    pub number_of_days: u32,
    /// The employee's stated reason.
    pub reason: String,
    /// Current lifecycle state.
    pub status: LeaveStatus,
    /// When the request was submitted.
    pub applied_date: NaiveDateTime,
    /// The HR actor who decided the request, once decided.
    pub approved_by: Option<String>,
    /// When the request was decided.
    pub decision_date: Option<NaiveDateTime>,
    /// Notes the deciding HR actor attached.
    pub hr_notes: Option<String>,
    /// The reason given when rejecting. Mandatory for rejections.
    pub rejection_reason: Option<String>,
    /// Optimistic-concurrency token, bumped on every mutation.
    pub version: u64,
}

impl LeaveRequest {
    /// Returns true if this request's date range intersects the given range.
    ///
    /// Ranges are inclusive on both ends.
    pub fn overlaps(&self, start_date: NaiveDate, end_date: NaiveDate) -> bool {
        self.start_date <= end_date && self.end_date >= start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_request(start: &str, end: &str) -> LeaveRequest {
        LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: "emp_001".to_string(),
            leave_type: LeaveType::Annual,
            start_date: make_date(start),
            end_date: make_date(end),
            number_of_days: 3,
            reason: "family visit".to_string(),
            status: LeaveStatus::Pending,
            applied_date: make_date("2026-03-01").and_hms_opt(10, 0, 0).unwrap(),
            approved_by: None,
            decision_date: None,
            hr_notes: None,
            rejection_reason: None,
            version: 1,
        }
    }

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(serde_json::to_string(&LeaveType::Annual).unwrap(), "\"annual\"");
        assert_eq!(
            serde_json::to_string(&LeaveType::Emergency).unwrap(),
            "\"emergency\""
        );
    }

    #[test]
    fn test_leave_status_terminal_states() {
        assert!(!LeaveStatus::Pending.is_terminal());
        assert!(LeaveStatus::Approved.is_terminal());
        assert!(LeaveStatus::Rejected.is_terminal());
        assert!(LeaveStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_overlaps_intersecting_ranges() {
        let request = make_request("2026-03-10", "2026-03-12");
        assert!(request.overlaps(make_date("2026-03-12"), make_date("2026-03-14")));
        assert!(request.overlaps(make_date("2026-03-08"), make_date("2026-03-10")));
        assert!(request.overlaps(make_date("2026-03-11"), make_date("2026-03-11")));
    }

    #[test]
    fn test_overlaps_disjoint_ranges() {
        let request = make_request("2026-03-10", "2026-03-12");
        assert!(!request.overlaps(make_date("2026-03-13"), make_date("2026-03-15")));
        assert!(!request.overlaps(make_date("2026-03-07"), make_date("2026-03-09")));
    }

    #[test]
    fn test_request_serialization_round_trip() {
        let request = make_request("2026-03-10", "2026-03-12");
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: LeaveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }

    #[test]
    fn test_deserialize_request_status() {
        let request = make_request("2026-03-10", "2026-03-12");
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"status\":\"pending\""));
    }
}
