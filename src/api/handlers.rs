//! HTTP request handlers for the Lifecycle Engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! handlers are thin: they extract the actor context the auth
//! collaborator forwarded in headers, parse the body, and delegate to the
//! gateway. Exact REST shape aside, the engine surface is the gateway's.

use axum::{
    Json, Router, async_trait,
    extract::{FromRequestParts, Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, request::Parts},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Actor, Role};

use super::request::{CheckInRequest, CheckOutRequest, DecideLeaveRequest, SubmitLeaveRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// The authenticated actor, extracted from the headers the auth
/// collaborator attaches to every request.
pub struct ActorContext(pub Actor);

#[async_trait]
impl<S> FromRequestParts<S> for ActorContext
where
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let employee_id = header_value(&parts.headers, "x-employee-id")
            .ok_or_else(|| missing_actor("the X-Employee-Id header is required"))?;
        let role = header_value(&parts.headers, "x-role")
            .ok_or_else(|| missing_actor("the X-Role header is required"))?;
        let role = match role.as_str() {
            "employee" => Role::Employee,
            "hr" => Role::Hr,
            "admin" => Role::Admin,
            other => {
                return Err(missing_actor(&format!("unknown role '{}'", other)));
            }
        };
        let department = header_value(&parts.headers, "x-department");

        Ok(ActorContext(Actor {
            employee_id,
            role,
            department,
        }))
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

fn missing_actor(message: &str) -> ApiErrorResponse {
    ApiErrorResponse {
        status: StatusCode::UNAUTHORIZED,
        error: ApiError::missing_actor(message),
    }
}

fn idempotency_key(headers: &HeaderMap) -> Option<String> {
    header_value(headers, "idempotency-key")
}

/// Unwraps a JSON body, mapping extraction failures to typed errors.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/check-in", post(check_in_handler))
        .route("/attendance/check-out", post(check_out_handler))
        .route("/attendance/today", get(today_handler))
        .route("/attendance/:employee_id/:date", get(attendance_handler))
        .route("/leaves", post(submit_leave_handler))
        .route("/leaves/:id", get(leave_handler))
        .route("/leaves/:id/decide", post(decide_leave_handler))
        .route("/leaves/:id/cancel", post(cancel_leave_handler))
        .route("/leaves/balance/:employee_id", get(balance_handler))
        .with_state(state)
}

/// Handler for POST /attendance/check-in.
async fn check_in_handler(
    State(state): State<AppState>,
    ActorContext(actor): ActorContext,
    headers: HeaderMap,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %actor.employee_id,
        "Processing check-in request"
    );

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    match state.gateway().check_in(
        &actor,
        request.location.unwrap_or_default(),
        request.notes,
        idempotency_key(&headers),
    ) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Check-in failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /attendance/check-out.
async fn check_out_handler(
    State(state): State<AppState>,
    ActorContext(actor): ActorContext,
    headers: HeaderMap,
    payload: Result<Json<CheckOutRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %actor.employee_id,
        "Processing check-out request"
    );

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    match state.gateway().check_out(
        &actor,
        request.break_minutes,
        request.notes,
        idempotency_key(&headers),
    ) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Check-out failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /attendance/today.
async fn today_handler(
    State(state): State<AppState>,
    ActorContext(actor): ActorContext,
) -> impl IntoResponse {
    match state.gateway().today(&actor) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /attendance/{employee_id}/{date}.
async fn attendance_handler(
    State(state): State<AppState>,
    ActorContext(actor): ActorContext,
    Path((employee_id, date)): Path<(String, NaiveDate)>,
) -> impl IntoResponse {
    match state.gateway().attendance(&actor, &employee_id, date) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /leaves.
async fn submit_leave_handler(
    State(state): State<AppState>,
    ActorContext(actor): ActorContext,
    headers: HeaderMap,
    payload: Result<Json<SubmitLeaveRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %actor.employee_id,
        "Processing leave submission"
    );

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    match state.gateway().submit_leave(
        &actor,
        request.leave_type,
        request.start_date,
        request.end_date,
        request.reason,
        idempotency_key(&headers),
    ) {
        Ok(leave) => (StatusCode::CREATED, Json(leave)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave submission failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /leaves/{id}.
async fn leave_handler(
    State(state): State<AppState>,
    ActorContext(actor): ActorContext,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.gateway().leave(&actor, id) {
        Ok(leave) => (StatusCode::OK, Json(leave)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /leaves/{id}/decide.
async fn decide_leave_handler(
    State(state): State<AppState>,
    ActorContext(actor): ActorContext,
    Path(id): Path<Uuid>,
    payload: Result<Json<DecideLeaveRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        request_id = %id,
        decided_by = %actor.employee_id,
        "Processing leave decision"
    );

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    match state.gateway().decide_leave(
        &actor,
        id,
        request.decision,
        request.expected_version,
        request.hr_notes,
        request.rejection_reason,
    ) {
        Ok(leave) => (StatusCode::OK, Json(leave)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave decision failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /leaves/{id}/cancel.
async fn cancel_leave_handler(
    State(state): State<AppState>,
    ActorContext(actor): ActorContext,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.gateway().cancel_leave(&actor, id) {
        Ok(leave) => (StatusCode::OK, Json(leave)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /leaves/balance/{employee_id}.
async fn balance_handler(
    State(state): State<AppState>,
    ActorContext(actor): ActorContext,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    match state.gateway().balance(&actor, &employee_id) {
        Ok(balances) => (StatusCode::OK, Json(balances)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}
