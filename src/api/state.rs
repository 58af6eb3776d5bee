//! Application state for the Lifecycle Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::gateway::LifecycleGateway;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers; every
/// handler reaches the engine through the gateway it holds.
#[derive(Clone)]
pub struct AppState {
    /// The lifecycle gateway behind all endpoints.
    gateway: Arc<LifecycleGateway>,
}

impl AppState {
    /// Creates a new application state around the given gateway.
    pub fn new(gateway: LifecycleGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    /// Returns a reference to the gateway.
    pub fn gateway(&self) -> &LifecycleGateway {
        &self.gateway
    }
}
