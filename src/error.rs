//! Error types for the Attendance and Leave Lifecycle Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during lifecycle transitions.
//! The variants fall into four groups: validation errors (the input is
//! structurally wrong), conflict errors (a precondition no longer holds),
//! authorization errors, and resource errors (business-rule rejections).

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{LeaveStatus, LeaveType};

/// The main error type for the Lifecycle Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. A failed
/// transition never leaves partial state behind; entities stay at their
/// last-committed values.
///
/// # Example
///
/// ```
/// use lifecycle_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No leave policy is configured for the given leave type.
    #[error("No leave policy configured for leave type '{leave_type}'")]
    PolicyNotFound {
        /// The leave type without a policy entry.
        leave_type: LeaveType,
    },

    /// A check-in was attempted for a day that already has one.
    #[error("Employee '{employee_id}' already checked in on {date}")]
    AlreadyCheckedIn {
        /// The employee who attempted the duplicate check-in.
        employee_id: String,
        /// The calendar day of the existing record.
        date: NaiveDate,
    },

    /// A check-out was attempted without an open attendance session.
    #[error("No open attendance session for employee '{employee_id}' on {date}")]
    NoOpenSession {
        /// The employee who attempted the check-out.
        employee_id: String,
        /// The calendar day of the attempt.
        date: NaiveDate,
    },

    /// Check-in and check-out timestamps are not in a valid order.
    #[error("Invalid timestamp order: {message}")]
    InvalidOrder {
        /// A description of what made the order invalid.
        message: String,
    },

    /// A leave request's end date falls before its start date.
    #[error("Invalid leave range: end date {end_date} is before start date {start_date}")]
    InvalidRange {
        /// The requested start date.
        start_date: NaiveDate,
        /// The requested end date.
        end_date: NaiveDate,
    },

    /// A leave request starts in the past.
    #[error("Leave cannot start in the past: {start_date}")]
    PastStartDate {
        /// The requested start date.
        start_date: NaiveDate,
    },

    /// A leave reason is missing or exceeds the permitted length.
    #[error("Invalid leave reason: {message}")]
    InvalidReason {
        /// A description of what made the reason invalid.
        message: String,
    },

    /// A leave range contains no working days after holiday exclusion.
    #[error("Leave range {start_date} to {end_date} contains no working days")]
    EmptyDuration {
        /// The requested start date.
        start_date: NaiveDate,
        /// The requested end date.
        end_date: NaiveDate,
    },

    /// A leave range overlaps an existing pending or approved request.
    #[error("Leave range overlaps existing request {request_id}")]
    OverlappingLeave {
        /// The id of the overlapping request.
        request_id: Uuid,
    },

    /// The employee's remaining balance cannot cover the requested days.
    #[error(
        "Insufficient {leave_type} leave balance: requested {requested} days, {remaining} remaining"
    )]
    InsufficientBalance {
        /// The leave type being requested.
        leave_type: LeaveType,
        /// The number of days requested.
        requested: i64,
        /// The days remaining in the ledger.
        remaining: i64,
    },

    /// A decision was attempted on a request that is no longer pending.
    #[error("Leave request {request_id} is not pending (status: {status})")]
    NotPending {
        /// The id of the request.
        request_id: Uuid,
        /// The request's current status.
        status: LeaveStatus,
    },

    /// The caller's version token does not match the stored request.
    #[error("Version mismatch for leave request {request_id}: expected {expected}, found {actual}")]
    VersionMismatch {
        /// The id of the request.
        request_id: Uuid,
        /// The version supplied by the caller.
        expected: u64,
        /// The version currently stored.
        actual: u64,
    },

    /// A cancellation was attempted on a request that cannot be cancelled.
    #[error("Leave request {request_id} cannot be cancelled: {message}")]
    NotCancellable {
        /// The id of the request.
        request_id: Uuid,
        /// A description of why cancellation is not allowed.
        message: String,
    },

    /// A rejection was submitted without a rejection reason.
    #[error("A rejection reason is required when rejecting a leave request")]
    MissingRejectionReason,

    /// The actor is not allowed to perform the operation.
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// A description of the denied operation.
        message: String,
    },

    /// No leave request exists with the given id.
    #[error("Leave request not found: {request_id}")]
    LeaveNotFound {
        /// The id that was looked up.
        request_id: Uuid,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
