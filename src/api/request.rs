//! Request types for the Lifecycle Engine API.
//!
//! This module defines the JSON request structures for the attendance and
//! leave endpoints. The authenticated actor does not appear here; it
//! arrives from the auth collaborator via headers and is extracted
//! separately.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{LeaveDecision, LeaveType, Location};

/// Request body for `POST /attendance/check-in`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    /// Where the employee is working from. Defaults to the office.
    #[serde(default)]
    pub location: Option<Location>,
    /// Free-form notes to attach to the day.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request body for `POST /attendance/check-out`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutRequest {
    /// Unpaid break minutes taken during the day. Defaults to the shift
    /// configuration's standard break.
    #[serde(default)]
    pub break_minutes: Option<u32>,
    /// Free-form notes to attach to the day.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request body for `POST /leaves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitLeaveRequest {
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The employee's stated reason.
    pub reason: String,
}

/// Request body for `POST /leaves/{id}/decide`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideLeaveRequest {
    /// The decision to apply.
    pub decision: LeaveDecision,
    /// The request version the deciding actor read. A stale value loses
    /// the race and yields a conflict.
    pub expected_version: u64,
    /// Notes from the deciding actor, stored on either outcome.
    #[serde(default)]
    pub hr_notes: Option<String>,
    /// Why the request was rejected. Mandatory when rejecting.
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_check_in_request_with_defaults() {
        let request: CheckInRequest = serde_json::from_str("{}").unwrap();
        assert!(request.location.is_none());
        assert!(request.notes.is_none());
    }

    #[test]
    fn test_deserialize_check_in_request_with_location() {
        let json = r#"{"location": "remote", "notes": "working from home"}"#;
        let request: CheckInRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.location, Some(Location::Remote));
        assert_eq!(request.notes.as_deref(), Some("working from home"));
    }

    #[test]
    fn test_deserialize_submit_leave_request() {
        let json = r#"{
            "leave_type": "annual",
            "start_date": "2026-03-09",
            "end_date": "2026-03-11",
            "reason": "family visit"
        }"#;
        let request: SubmitLeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.leave_type, LeaveType::Annual);
        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
        );
    }

    #[test]
    fn test_deserialize_decide_request() {
        let json = r#"{
            "decision": "rejected",
            "expected_version": 1,
            "rejection_reason": "project deadline"
        }"#;
        let request: DecideLeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.decision, LeaveDecision::Rejected);
        assert_eq!(request.expected_version, 1);
        assert!(request.hr_notes.is_none());
    }

    #[test]
    fn test_submit_leave_request_requires_reason() {
        let json = r#"{
            "leave_type": "annual",
            "start_date": "2026-03-09",
            "end_date": "2026-03-11"
        }"#;
        let result = serde_json::from_str::<SubmitLeaveRequest>(json);
        assert!(result.is_err());
    }
}
