//! Configuration loading and management for the Lifecycle Engine.
//!
//! This module provides functionality to load portal configuration from YAML
//! files: shift timing (start, grace period, thresholds), per-leave-type
//! policies, and the organization holiday calendar.
//!
//! # Example
//!
//! ```no_run
//! use lifecycle_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hr-portal").unwrap();
//! println!("Loaded portal: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    Holiday, HolidayCalendar, HolidayFile, LeavePolicy, LeavePolicyConfig, PortalConfig,
    PortalMetadata, ShiftConfig, ShiftsConfig,
};
