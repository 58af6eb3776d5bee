//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading portal
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::LeaveType;

use super::types::{
    HolidayCalendar, HolidayFile, LeavePolicy, LeavePolicyConfig, PortalConfig, PortalMetadata,
    ShiftConfig, ShiftsConfig,
};

/// Loads and provides access to portal configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query shift timing, leave policies, and the
/// holiday calendar.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/hr-portal/
/// ├── portal.yaml        # Portal metadata and weekend days
/// ├── shifts.yaml        # Default and per-department shift timing
/// ├── leave_policy.yaml  # Per-leave-type allocations
/// └── holidays/
///     └── 2026.yaml      # Organization holidays for this year
/// ```
///
/// # Example
///
/// ```no_run
/// use lifecycle_engine::config::ConfigLoader;
/// use lifecycle_engine::models::LeaveType;
///
/// let loader = ConfigLoader::load("./config/hr-portal").unwrap();
///
/// let shift = loader.shift_config(Some("engineering"));
/// println!("Shift starts at {}", shift.shift_start);
///
/// let policy = loader.leave_policy(LeaveType::Annual).unwrap();
/// println!("Annual allocation: {} days", policy.allocated_days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PortalConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/hr-portal")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load portal.yaml
        let portal_path = path.join("portal.yaml");
        let metadata = Self::load_yaml::<PortalMetadata>(&portal_path)?;

        // Load shifts.yaml
        let shifts_path = path.join("shifts.yaml");
        let shifts = Self::load_yaml::<ShiftsConfig>(&shifts_path)?;

        // Load leave_policy.yaml
        let policy_path = path.join("leave_policy.yaml");
        let policy_config = Self::load_yaml::<LeavePolicyConfig>(&policy_path)?;

        // Load all holiday files from the holidays directory
        let holidays_dir = path.join("holidays");
        let holiday_files = Self::load_holidays(&holidays_dir)?;

        let config = PortalConfig::new(metadata, shifts, policy_config.policies, holiday_files);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory.
    ///
    /// The directory must exist; an organization with no configured
    /// holidays keeps it empty.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<HolidayFile>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut files = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file = Self::load_yaml::<HolidayFile>(&path)?;
                files.push(file);
            }
        }

        Ok(files)
    }

    /// Returns the underlying portal configuration.
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Returns the portal metadata.
    pub fn metadata(&self) -> &PortalMetadata {
        self.config.metadata()
    }

    /// Returns the shift configuration for a department.
    ///
    /// Falls back to the organization default when the department is
    /// unknown or not supplied.
    pub fn shift_config(&self, department: Option<&str>) -> &ShiftConfig {
        department
            .and_then(|d| self.config.shifts().departments.get(d))
            .unwrap_or(&self.config.shifts().default)
    }

    /// Returns the leave policy for a leave type.
    ///
    /// # Errors
    ///
    /// Returns `PolicyNotFound` when the leave type has no policy entry.
    pub fn leave_policy(&self, leave_type: LeaveType) -> EngineResult<&LeavePolicy> {
        self.config
            .policies()
            .get(&leave_type)
            .ok_or(EngineError::PolicyNotFound { leave_type })
    }

    /// Returns the merged working-day calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        self.config.calendar()
    }
}
