//! Savings goal results

use serde::{Deserialize, Serialize};

use super::mode::ExplanationMode;
use super::section::{FieldValue, ReportSection};

/// Goal types offered in the menu; any other label is accepted too
pub const SUGGESTED_GOAL_TYPES: &[&str] = &[
    "Emergency Fund",
    "Down Payment",
    "Car",
    "Retirement",
    "Custom",
];

/// Monthly savings needed to reach a target with no growth assumed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalResult {
    pub goal_type: String,
    pub target: f64,
    pub years: u32,
    pub monthly_needed: f64,
}

impl ReportSection for GoalResult {
    fn title(&self) -> &'static str {
        "LATEST GOAL"
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("goal_type", FieldValue::Text(self.goal_type.clone())),
            ("target", FieldValue::Money(self.target)),
            ("years", FieldValue::Integer(i64::from(self.years))),
            ("monthly_needed", FieldValue::Money(self.monthly_needed)),
        ]
    }

    fn explanation(&self, mode: ExplanationMode) -> &'static str {
        match mode {
            ExplanationMode::Beginner => "This is just goal ÷ months. It's the easiest baseline.",
            ExplanationMode::Intermediate => {
                "This ignores investment growth. Investing could reduce the monthly amount."
            }
            ExplanationMode::Advanced => {
                "A real plan would model expected returns, inflation, and uncertainty."
            }
        }
    }
}
