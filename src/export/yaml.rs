//! YAML Export functionality
//!
//! Exports a profile to YAML for a human-readable copy.

use crate::error::{AdvisorError, AdvisorResult};
use crate::export::json::ProfileExport;
use crate::models::Profile;
use std::io::Write;

/// Export a profile to YAML format
pub fn export_profile_yaml<W: Write>(profile: &Profile, writer: &mut W) -> AdvisorResult<()> {
    let export = ProfileExport::new(profile);

    writeln!(writer, "# Wealth Advisor Profile Export")
        .map_err(|e| AdvisorError::Export(e.to_string()))?;
    writeln!(writer, "# Profile: {}", export.profile.name)
        .map_err(|e| AdvisorError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| AdvisorError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| AdvisorError::Export(e.to_string()))?;
    writeln!(writer, "#").map_err(|e| AdvisorError::Export(e.to_string()))?;
    writeln!(
        writer,
        "# Import with: advisor profile import <this file>"
    )
    .map_err(|e| AdvisorError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AdvisorError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AdvisorError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> AdvisorResult<ProfileExport> {
    let export: ProfileExport =
        serde_yaml::from_str(yaml_str).map_err(|e| AdvisorError::Import(e.to_string()))?;

    export.validate().map_err(AdvisorError::Import)?;

    Ok(export)
}
