//! Profile Report
//!
//! Plain-text summary of a profile and every stored result, with the
//! explanation for the chosen mode under each section.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::audit::EntityType;
use crate::display::format::{double_separator, format_currency, LINE_WIDTH};
use crate::display::results::format_field_value;
use crate::error::AdvisorResult;
use crate::models::{ExplanationMode, FieldValue, Profile, ReportSection};
use crate::storage::{file_stem, write_text_atomic, Storage};

/// Title line at the top of every report
pub const REPORT_TITLE: &str = "Wealth Advisor - Report";

/// Closing line of every report
pub const REPORT_DISCLAIMER: &str = "DISCLAIMER: Educational only. Not financial advice.";

/// Profile Report
#[derive(Debug, Clone)]
pub struct ProfileReport {
    /// Snapshot of the profile the report was generated from
    pub profile: Profile,
    /// Explanation mode the report was generated under
    pub mode: ExplanationMode,
    /// When the report was generated (local time)
    pub generated_at: DateTime<Local>,
    /// Currency symbol used for amounts
    pub currency_symbol: String,
}

impl ProfileReport {
    /// Generate a report for a profile
    pub fn generate(profile: &Profile, mode: ExplanationMode) -> Self {
        Self {
            profile: profile.clone(),
            mode,
            generated_at: Local::now(),
            currency_symbol: "$".to_string(),
        }
    }

    /// Use a different currency symbol
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Format the report as text
    pub fn format_text(&self) -> String {
        let symbol = self.currency_symbol.as_str();
        let finances = &self.profile.finances;
        let mut lines: Vec<String> = Vec::new();

        lines.push(REPORT_TITLE.to_string());
        lines.push(format!("Name: {}", self.profile.name));
        lines.push(format!("Date: {}", self.generated_at.format("%Y-%m-%d %H:%M")));
        lines.push(format!("Mode: {}", self.mode));
        lines.push(double_separator(LINE_WIDTH));

        lines.push(String::new());
        lines.push("PROFILE:".to_string());
        lines.push(format!("- age: {}", self.profile.age));
        for (label, amount) in [
            ("monthly_income", finances.monthly_income),
            ("monthly_expenses", finances.monthly_expenses),
            ("cash_savings", finances.cash_savings),
            ("total_debt", finances.total_debt),
        ] {
            lines.push(format!("- {}: {}", label, format_currency(amount, symbol)));
        }
        lines.push(format!("- debt_apr: {}%", finances.debt_apr));

        for section in self.profile.sections() {
            lines.push(String::new());
            self.push_section(&mut lines, section.as_ref());
        }

        lines.push(String::new());
        lines.push(REPORT_DISCLAIMER.to_string());

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    fn push_section(&self, lines: &mut Vec<String>, section: &dyn ReportSection) {
        lines.push(format!("{}:", section.title()));

        for (label, value) in section.fields() {
            match value {
                FieldValue::List(items) if !items.is_empty() => {
                    lines.push(format!("- {}:", label));
                    lines.extend(items.iter().map(|item| format!("    - {}", item)));
                }
                other => lines.push(format!(
                    "- {}: {}",
                    label,
                    format_field_value(&other, &self.currency_symbol)
                )),
            }
        }

        lines.push(format!("({})", section.explanation(self.mode)));
    }

    /// Write the report to `path`
    pub fn write_to(&self, path: impl AsRef<Path>) -> AdvisorResult<()> {
        write_text_atomic(path, &self.format_text())
    }

    /// Write the report to the reports directory and record the export
    ///
    /// The file is `<reports>/<name>_report.txt`; an earlier report for the
    /// same profile is replaced.
    pub fn export(&self, storage: &Storage) -> AdvisorResult<PathBuf> {
        let path = storage
            .paths()
            .report_file(&file_stem(&self.profile.name));

        self.write_to(&path)?;
        storage.log_export(
            EntityType::Report,
            self.profile.name.clone(),
            path.display().to_string(),
        )?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::AdvisorPaths;
    use crate::models::{FinancialInputs, RiskResult, RiskStyle, Scenario, SimulationInput};
    use crate::services::{build_plan, plan_goal, simulate};
    use tempfile::TempDir;

    fn full_profile() -> Profile {
        let finances = FinancialInputs {
            monthly_income: 4000.0,
            monthly_expenses: 3000.0,
            cash_savings: 1000.0,
            total_debt: 8000.0,
            debt_apr: 19.5,
        };
        let mut profile = Profile::new("Alice", 30, finances);
        profile.set_risk(RiskResult {
            score: 5,
            style: RiskStyle::Balanced,
        });
        profile.set_plan(build_plan(&profile.finances, RiskStyle::Balanced));
        profile.set_simulation(simulate(&SimulationInput {
            years: 3,
            monthly_contribution: 0.0,
            starting_balance: 10000.0,
            scenario: Scenario::Low,
        }));
        profile.set_goal(plan_goal("Car", 12000.0, 2));
        profile
    }

    #[test]
    fn test_minimal_report() {
        let profile = Profile::new("Bob", 22, FinancialInputs::default());
        let text = ProfileReport::generate(&profile, ExplanationMode::Beginner).format_text();

        assert!(text.starts_with(REPORT_TITLE));
        assert!(text.contains("Name: Bob"));
        assert!(text.contains("Mode: Beginner"));
        assert!(text.contains("PROFILE:"));
        assert!(text.contains("- monthly_income: $3,500.00"));
        assert!(!text.contains("RISK:"));
        assert!(!text.contains("LATEST PLAN:"));
        assert!(text.trim_end().ends_with(REPORT_DISCLAIMER));
    }

    #[test]
    fn test_sections_in_order() {
        let text = ProfileReport::generate(&full_profile(), ExplanationMode::Beginner).format_text();

        let positions: Vec<usize> = ["PROFILE:", "RISK:", "LATEST PLAN:", "LATEST SIMULATION:", "LATEST GOAL:"]
            .iter()
            .map(|title| text.find(title).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(text.contains("- risk_style: Balanced"));
        assert!(text.contains("- emergency_fund: $9,000.00 to $18,000.00"));
        assert!(text.contains("- ending_nominal: $8,436.48"));
        assert!(text.contains("- monthly_needed: $500.00"));
        assert!(text.contains("    - High-interest debt detected."));
    }

    #[test]
    fn test_explanations_follow_mode() {
        let profile = full_profile();

        let beginner = ProfileReport::generate(&profile, ExplanationMode::Beginner).format_text();
        assert!(beginner.contains("starts with safety"));
        assert!(beginner.contains("goal ÷ months"));

        let advanced = ProfileReport::generate(&profile, ExplanationMode::Advanced).format_text();
        assert!(advanced.contains("opportunity cost"));
        assert!(advanced.contains("Mode: Advanced"));
        assert!(!advanced.contains("starts with safety"));
    }

    #[test]
    fn test_currency_symbol() {
        let profile = Profile::new("Bob", 22, FinancialInputs::default());
        let text = ProfileReport::generate(&profile, ExplanationMode::Beginner)
            .with_currency("€")
            .format_text();
        assert!(text.contains("€3,500.00"));
    }

    #[test]
    fn test_export_writes_file_and_logs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdvisorPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let report = ProfileReport::generate(&full_profile(), ExplanationMode::Intermediate);
        let path = report.export(&storage).unwrap();

        assert_eq!(path, temp_dir.path().join("reports").join("Alice_report.txt"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, report.format_text());

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_type, EntityType::Report);
    }
}
