//! Explanation mode
//!
//! Selects which canned explanation accompanies each result section.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much background the explanations assume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationMode {
    /// Plain-language explanations (default)
    #[default]
    Beginner,
    /// Mentions prioritization and trade-offs
    Intermediate,
    /// Mentions opportunity cost, inflation and model limits
    Advanced,
}

impl ExplanationMode {
    /// All modes in menu order
    pub fn all() -> &'static [ExplanationMode] {
        &[Self::Beginner, Self::Intermediate, Self::Advanced]
    }

    /// Parse a mode from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "b" => Some(Self::Beginner),
            "intermediate" | "i" => Some(Self::Intermediate),
            "advanced" | "a" => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for ExplanationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ExplanationMode::parse("Beginner"), Some(ExplanationMode::Beginner));
        assert_eq!(
            ExplanationMode::parse("ADVANCED"),
            Some(ExplanationMode::Advanced)
        );
        assert_eq!(ExplanationMode::parse("i"), Some(ExplanationMode::Intermediate));
        assert_eq!(ExplanationMode::parse("expert"), None);
    }

    #[test]
    fn test_default_is_beginner() {
        assert_eq!(ExplanationMode::default(), ExplanationMode::Beginner);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for mode in ExplanationMode::all() {
            assert_eq!(ExplanationMode::parse(&mode.to_string()), Some(*mode));
        }
    }
}
