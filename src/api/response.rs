//! Response types for the Lifecycle Engine API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP statuses: validation errors are 400, conflicts
//! are 409, authorization failures are 403, and balance rejections are
//! 422. Every engine error is recovered into a typed response; nothing is
//! swallowed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing actor context error response.
    pub fn missing_actor(message: impl Into<String>) -> Self {
        Self::new("MISSING_ACTOR_CONTEXT", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, code) = match &error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::PolicyNotFound { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            EngineError::InvalidOrder { .. } => (StatusCode::BAD_REQUEST, "INVALID_ORDER"),
            EngineError::InvalidRange { .. } => (StatusCode::BAD_REQUEST, "INVALID_RANGE"),
            EngineError::PastStartDate { .. } => (StatusCode::BAD_REQUEST, "PAST_START_DATE"),
            EngineError::InvalidReason { .. } => (StatusCode::BAD_REQUEST, "INVALID_REASON"),
            EngineError::EmptyDuration { .. } => (StatusCode::BAD_REQUEST, "EMPTY_DURATION"),
            EngineError::MissingRejectionReason => {
                (StatusCode::BAD_REQUEST, "MISSING_REJECTION_REASON")
            }
            EngineError::AlreadyCheckedIn { .. } => (StatusCode::CONFLICT, "ALREADY_CHECKED_IN"),
            EngineError::NoOpenSession { .. } => (StatusCode::CONFLICT, "NO_OPEN_SESSION"),
            EngineError::OverlappingLeave { .. } => (StatusCode::CONFLICT, "OVERLAPPING_LEAVE"),
            EngineError::NotPending { .. } => (StatusCode::CONFLICT, "NOT_PENDING"),
            EngineError::VersionMismatch { .. } => (StatusCode::CONFLICT, "VERSION_MISMATCH"),
            EngineError::NotCancellable { .. } => (StatusCode::CONFLICT, "NOT_CANCELLABLE"),
            EngineError::Unauthorized { .. } => (StatusCode::FORBIDDEN, "UNAUTHORIZED"),
            EngineError::InsufficientBalance { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INSUFFICIENT_BALANCE")
            }
            EngineError::LeaveNotFound { .. } => (StatusCode::NOT_FOUND, "LEAVE_NOT_FOUND"),
        };

        let error = match &error {
            EngineError::InsufficientBalance { remaining, .. } => ApiError::with_details(
                code,
                error.to_string(),
                format!("{} days remaining", remaining),
            ),
            other => ApiError::new(code, other.to_string()),
        };

        ApiErrorResponse { status, error }
    }
}
