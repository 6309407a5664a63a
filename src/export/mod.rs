//! Export module for Wealth Advisor
//!
//! Moves a single profile in and out of the data directory:
//! - JSON: machine-readable, exact numeric round-trip
//! - YAML: human-readable, with a comment header

pub mod json;
pub mod yaml;

pub use json::{export_profile_json, import_from_json, ProfileExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_profile_yaml, import_from_yaml};

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::error::{AdvisorError, AdvisorResult};
use crate::models::Profile;

/// Profile export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl ExportFormat {
    /// Pick a format from a file extension; anything but .yaml/.yml is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// Export a profile in the given format
pub fn export_profile<W: Write>(
    profile: &Profile,
    format: ExportFormat,
    writer: &mut W,
) -> AdvisorResult<()> {
    match format {
        ExportFormat::Json => export_profile_json(profile, writer),
        ExportFormat::Yaml => export_profile_yaml(profile, writer),
    }
}

/// Read and validate an export file, choosing the format by extension
pub fn read_profile_export(path: &Path) -> AdvisorResult<ProfileExport> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AdvisorError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;

    match ExportFormat::from_path(path) {
        ExportFormat::Json => import_from_json(&contents),
        ExportFormat::Yaml => import_from_yaml(&contents),
    }
}
