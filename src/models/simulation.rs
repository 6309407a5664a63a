//! Growth simulation scenarios and results

use serde::{Deserialize, Serialize};
use std::fmt;

use super::mode::ExplanationMode;
use super::section::{FieldValue, ReportSection};

/// Fixed-return market scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Scenario {
    Low,
    #[default]
    Base,
    High,
}

impl Scenario {
    /// All scenarios in menu order
    pub fn all() -> &'static [Scenario] {
        &[Self::Low, Self::Base, Self::High]
    }

    /// Nominal annual return for this scenario
    pub fn annual_return(&self) -> f64 {
        match self {
            Self::Low => 0.04,
            Self::Base => 0.07,
            Self::High => 0.10,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "base" => Some(Self::Base),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Base => write!(f, "Base"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Inputs to a growth simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Horizon in whole years (at least 1)
    pub years: u32,
    pub monthly_contribution: f64,
    pub starting_balance: f64,
    pub scenario: Scenario,
}

/// Outcome of a growth simulation, with its inputs echoed back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub years: u32,
    pub monthly_contribution: f64,
    pub starting_balance: f64,
    pub scenario: Scenario,
    pub annual_return: f64,
    pub ending_nominal: f64,
    /// Nominal balance deflated to today's dollars
    pub ending_real: f64,
    pub total_contributions: f64,
    #[serde(default)]
    pub downturn_applied: bool,
}

impl ReportSection for SimulationResult {
    fn title(&self) -> &'static str {
        "LATEST SIMULATION"
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("years", FieldValue::Integer(i64::from(self.years))),
            ("monthly", FieldValue::Money(self.monthly_contribution)),
            ("starting", FieldValue::Money(self.starting_balance)),
            ("scenario", FieldValue::Text(self.scenario.to_string())),
            ("annual_return", FieldValue::Rate(self.annual_return)),
            ("total_contributions", FieldValue::Money(self.total_contributions)),
            ("ending_nominal", FieldValue::Money(self.ending_nominal)),
            ("ending_real", FieldValue::Money(self.ending_real)),
            ("bad_year_included", FieldValue::Flag(self.downturn_applied)),
        ]
    }

    fn explanation(&self, mode: ExplanationMode) -> &'static str {
        match mode {
            ExplanationMode::Beginner => {
                "Inflation-adjusted means how much it would feel like in today's dollars."
            }
            ExplanationMode::Intermediate => {
                "This assumes steady returns plus one downturn to show emotional realism."
            }
            ExplanationMode::Advanced => {
                "This is a simplified model; real markets vary, but it helps planning behavior."
            }
        }
    }
}
