//! Leave request lifecycle transitions.
//!
//! `submit`, `decide`, and `cancel` are pure over the request and the
//! employee's ledger balance: every precondition is checked before any
//! field or counter is touched, so a failed transition leaves both
//! untouched. The gateway commits the mutated request and balance as one
//! unit.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::config::{HolidayCalendar, LeavePolicy};
use crate::error::{EngineError, EngineResult};
use crate::lifecycle::day_count::count_working_days;
use crate::models::{LeaveBalance, LeaveDecision, LeaveRequest, LeaveStatus, LeaveType};

/// Longest accepted reason or rejection reason, in characters.
const MAX_REASON_LENGTH: usize = 500;

/// Submits a new leave request and reserves its days in the ledger.
///
/// The day count is computed here, once, and never recomputed afterwards.
/// Balance-tracked leave types require `remaining >= number_of_days`;
/// types whose policy is `unbounded` skip the check but still move the
/// ledger so usage stays visible.
///
/// # Errors
///
/// - `InvalidRange` when the end date is before the start date.
/// - `PastStartDate` when the leave would start before the submission day.
/// - `InvalidReason` when the reason is blank or too long.
/// - `EmptyDuration` when the range contains no working days.
/// - `OverlappingLeave` when a pending or approved request intersects the range.
/// - `InsufficientBalance` when the remaining balance cannot cover the days.
pub fn submit(
    employee_id: &str,
    leave_type: LeaveType,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: String,
    applied_at: NaiveDateTime,
    calendar: &HolidayCalendar,
    policy: &LeavePolicy,
    balance: &mut LeaveBalance,
    existing: &[LeaveRequest],
) -> EngineResult<LeaveRequest> {
    if end_date < start_date {
        return Err(EngineError::InvalidRange {
            start_date,
            end_date,
        });
    }

    if start_date < applied_at.date() {
        return Err(EngineError::PastStartDate { start_date });
    }

    if reason.trim().is_empty() {
        return Err(EngineError::InvalidReason {
            message: "a reason is required".to_string(),
        });
    }
    if reason.chars().count() > MAX_REASON_LENGTH {
        return Err(EngineError::InvalidReason {
            message: format!("reason is longer than {} characters", MAX_REASON_LENGTH),
        });
    }

    let number_of_days = count_working_days(start_date, end_date, calendar);
    if number_of_days == 0 {
        return Err(EngineError::EmptyDuration {
            start_date,
            end_date,
        });
    }

    if let Some(conflict) = existing.iter().find(|r| {
        matches!(r.status, LeaveStatus::Pending | LeaveStatus::Approved)
            && r.overlaps(start_date, end_date)
    }) {
        return Err(EngineError::OverlappingLeave {
            request_id: conflict.id,
        });
    }

    let requested = i64::from(number_of_days);
    if !policy.unbounded && balance.remaining() < requested {
        return Err(EngineError::InsufficientBalance {
            leave_type,
            requested,
            remaining: balance.remaining(),
        });
    }

    balance.reserve(requested);

    Ok(LeaveRequest {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        leave_type,
        start_date,
        end_date,
        number_of_days,
        reason,
        status: LeaveStatus::Pending,
        applied_date: applied_at,
        approved_by: None,
        decision_date: None,
        hr_notes: None,
        rejection_reason: None,
        version: 1,
    })
}

/// Applies an HR decision to a pending request.
///
/// Approval converts the reserved days into consumption; rejection
/// releases them without consuming balance. Both paths record the
/// decider, stamp the decision time, and bump the version token.
///
/// # Errors
///
/// - `NotPending` when the request was already decided (a lost race,
///   surfaced as a conflict rather than silently succeeding).
/// - `VersionMismatch` when the caller read a stale version.
/// - `MissingRejectionReason` when rejecting without a non-empty reason.
/// - `InvalidReason` when the rejection reason is too long.
pub fn decide(
    request: &mut LeaveRequest,
    decided_by: &str,
    decision: LeaveDecision,
    hr_notes: Option<String>,
    rejection_reason: Option<String>,
    expected_version: u64,
    decided_at: NaiveDateTime,
    balance: &mut LeaveBalance,
) -> EngineResult<()> {
    if request.status != LeaveStatus::Pending {
        return Err(EngineError::NotPending {
            request_id: request.id,
            status: request.status,
        });
    }

    if request.version != expected_version {
        return Err(EngineError::VersionMismatch {
            request_id: request.id,
            expected: expected_version,
            actual: request.version,
        });
    }

    let rejection_reason = rejection_reason.filter(|r| !r.trim().is_empty());
    if decision == LeaveDecision::Rejected {
        match rejection_reason.as_deref() {
            None => return Err(EngineError::MissingRejectionReason),
            Some(reason) if reason.chars().count() > MAX_REASON_LENGTH => {
                return Err(EngineError::InvalidReason {
                    message: format!(
                        "rejection reason is longer than {} characters",
                        MAX_REASON_LENGTH
                    ),
                });
            }
            Some(_) => {}
        }
    }

    let days = i64::from(request.number_of_days);
    match decision {
        LeaveDecision::Approved => {
            balance.consume(days);
            request.status = LeaveStatus::Approved;
        }
        LeaveDecision::Rejected => {
            balance.release(days);
            request.status = LeaveStatus::Rejected;
            request.rejection_reason = rejection_reason;
        }
    }

    request.approved_by = Some(decided_by.to_string());
    request.decision_date = Some(decided_at);
    request.hr_notes = hr_notes;
    request.version += 1;

    Ok(())
}

/// Cancels a pending request, or an approved request that has not started.
///
/// A pending cancellation releases the reservation; an approved one
/// reverses the consumed days back into the allocation.
///
/// # Errors
///
/// Returns `NotCancellable` when the leave already started or the request
/// is in a terminal state that cannot be reversed.
pub fn cancel(
    request: &mut LeaveRequest,
    today: NaiveDate,
    balance: &mut LeaveBalance,
) -> EngineResult<()> {
    let days = i64::from(request.number_of_days);

    match request.status {
        LeaveStatus::Pending => {
            balance.release(days);
        }
        LeaveStatus::Approved if request.start_date > today => {
            balance.restore(days);
        }
        LeaveStatus::Approved => {
            return Err(EngineError::NotCancellable {
                request_id: request.id,
                message: format!("leave already started on {}", request.start_date),
            });
        }
        status => {
            return Err(EngineError::NotCancellable {
                request_id: request.id,
                message: format!("request is already {}", status),
            });
        }
    }

    request.status = LeaveStatus::Cancelled;
    request.version += 1;

    Ok(())
}
