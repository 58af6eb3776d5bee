//! HTTP API module for the Lifecycle Engine.
//!
//! This module provides the REST endpoints for attendance check-in and
//! check-out, leave submission and decisions, and balance reads.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ActorContext, create_router};
pub use request::{CheckInRequest, CheckOutRequest, DecideLeaveRequest, SubmitLeaveRequest};
pub use response::ApiError;
pub use state::AppState;
