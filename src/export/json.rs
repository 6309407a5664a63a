//! JSON Export functionality
//!
//! Exports a single profile to JSON with schema versioning.

use crate::error::{AdvisorError, AdvisorResult};
use crate::models::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported profile document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The profile, including its stored results
    pub profile: Profile,
}

impl ProfileExport {
    /// Wrap a profile for export
    pub fn new(profile: &Profile) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profile: profile.clone(),
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        self.profile.validate().map_err(|e| e.to_string())
    }
}

/// Export a profile to JSON format
pub fn export_profile_json<W: Write>(profile: &Profile, writer: &mut W) -> AdvisorResult<()> {
    let export = ProfileExport::new(profile);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| AdvisorError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AdvisorError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export
pub fn import_from_json(json_str: &str) -> AdvisorResult<ProfileExport> {
    let export: ProfileExport =
        serde_json::from_str(json_str).map_err(|e| AdvisorError::Import(e.to_string()))?;

    export.validate().map_err(AdvisorError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialInputs, RiskStyle, Scenario, SimulationInput};
    use crate::services::{build_plan, simulate};

    fn sample_profile() -> Profile {
        let mut profile = Profile::new(
            "Alice",
            30,
            FinancialInputs {
                monthly_income: 4321.09,
                monthly_expenses: 2987.65,
                cash_savings: 0.1 + 0.2,
                total_debt: 0.0,
                debt_apr: 0.0,
            },
        );
        profile.set_plan(build_plan(&profile.finances, RiskStyle::Balanced));
        profile.set_simulation(simulate(&SimulationInput {
            years: 10,
            monthly_contribution: 200.0,
            starting_balance: 0.0,
            scenario: Scenario::High,
        }));
        profile
    }

    #[test]
    fn test_json_export_header_fields() {
        let mut output = Vec::new();
        export_profile_json(&sample_profile(), &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["profile"]["name"], "Alice");
        assert!(value["app_version"].is_string());
    }

    #[test]
    fn test_json_roundtrip_preserves_numbers() {
        let profile = sample_profile();
        let mut output = Vec::new();
        export_profile_json(&profile, &mut output).unwrap();

        let imported = import_from_json(std::str::from_utf8(&output).unwrap()).unwrap();
        assert_eq!(imported.profile, profile);
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let mut export = ProfileExport::new(&sample_profile());
        export.schema_version = "0.1.0".to_string();
        let json = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&json).unwrap_err();
        assert!(matches!(err, AdvisorError::Import(msg) if msg.contains("Schema version")));
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let mut export = ProfileExport::new(&sample_profile());
        export.profile.finances.total_debt = -10.0;
        let json = serde_json::to_string(&export).unwrap();

        assert!(matches!(
            import_from_json(&json),
            Err(AdvisorError::Import(_))
        ));
    }

    #[test]
    fn test_risk_style_must_match_score() {
        let mut export = ProfileExport::new(&sample_profile());
        export.profile.risk_score = Some(1);
        export.profile.risk_style = Some(RiskStyle::Aggressive);
        let json = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&json).unwrap_err();
        assert!(matches!(err, AdvisorError::Import(msg) if msg.contains("does not match score 1")));

        export.profile.risk_style = None;
        let json = serde_json::to_string(&export).unwrap();
        assert!(matches!(
            import_from_json(&json),
            Err(AdvisorError::Import(_))
        ));

        export.profile.risk_style = Some(RiskStyle::Conservative);
        let json = serde_json::to_string(&export).unwrap();
        assert!(import_from_json(&json).is_ok());
    }

    #[test]
    fn test_stored_sections_are_checked() {
        let mut export = ProfileExport::new(&sample_profile());
        if let Some(simulation) = export.profile.latest_simulation.as_mut() {
            simulation.years = 0;
        }
        let json = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&json).unwrap_err();
        assert!(matches!(err, AdvisorError::Import(msg) if msg.contains("latest_simulation.years")));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            import_from_json("not json"),
            Err(AdvisorError::Import(_))
        ));
    }
}
