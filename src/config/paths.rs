//! Path management for Wealth Advisor
//!
//! Resolves where profiles, reports, settings and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `WEALTH_ADVISOR_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (e.g. `~/.config/wealth-advisor` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::AdvisorError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "WEALTH_ADVISOR_DATA_DIR";

/// Manages all paths used by Wealth Advisor
#[derive(Debug, Clone)]
pub struct AdvisorPaths {
    /// Base directory for all Wealth Advisor data
    base_dir: PathBuf,
}

impl AdvisorPaths {
    /// Create a new AdvisorPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined
    /// and the override variable is not set.
    pub fn new() -> Result<Self, AdvisorError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create AdvisorPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory holding one JSON file per profile
    pub fn profiles_dir(&self) -> PathBuf {
        self.data_dir().join("profiles")
    }

    /// Get the directory text reports are exported to
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the report path for a profile (already sanitized) file stem
    pub fn report_file(&self, stem: &str) -> PathBuf {
        self.reports_dir().join(format!("{}_report.txt", stem))
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), AdvisorError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AdvisorError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.profiles_dir()).map_err(|e| {
            AdvisorError::Io(format!("Failed to create profiles directory: {}", e))
        })?;

        std::fs::create_dir_all(self.reports_dir())
            .map_err(|e| AdvisorError::Io(format!("Failed to create reports directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, AdvisorError> {
    ProjectDirs::from("", "", "wealth-advisor")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            AdvisorError::Config(format!(
                "Could not determine a home directory; set {} instead",
                DATA_DIR_ENV
            ))
        })
}
