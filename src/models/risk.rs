//! Risk questionnaire answers and results
//!
//! Each questionnaire answer maps directly to the points it contributes, so
//! scoring never depends on the order options are listed in.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::mode::ExplanationMode;
use super::section::{FieldValue, ReportSection};

/// Q1: what the user would do after a 20% drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawdownReaction {
    SellEverything,
    SellSome,
    Hold,
    BuyMore,
}

impl DrawdownReaction {
    /// Question text shown to the user
    pub const QUESTION: &'static str = "If your investments dropped 20%, what would you do?";

    /// All answers in menu order
    pub fn all() -> &'static [DrawdownReaction] {
        &[Self::SellEverything, Self::SellSome, Self::Hold, Self::BuyMore]
    }

    /// Points this answer contributes to the risk score
    pub fn points(&self) -> u8 {
        match self {
            Self::SellEverything => 0,
            Self::SellSome => 1,
            Self::Hold => 2,
            Self::BuyMore => 3,
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "sell-everything" | "sell-all" => Some(Self::SellEverything),
            "sell-some" => Some(Self::SellSome),
            "hold" => Some(Self::Hold),
            "buy-more" | "buy" => Some(Self::BuyMore),
            _ => None,
        }
    }
}

impl fmt::Display for DrawdownReaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SellEverything => write!(f, "Sell everything"),
            Self::SellSome => write!(f, "Sell some"),
            Self::Hold => write!(f, "Hold"),
            Self::BuyMore => write!(f, "Buy more"),
        }
    }
}

/// Q2: how long the user will stay invested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentHorizon {
    OneToThreeYears,
    ThreeToSevenYears,
    SevenToFifteenYears,
    FifteenPlusYears,
}

impl InvestmentHorizon {
    /// Question text shown to the user
    pub const QUESTION: &'static str = "How long will you invest for?";

    /// All answers in menu order
    pub fn all() -> &'static [InvestmentHorizon] {
        &[
            Self::OneToThreeYears,
            Self::ThreeToSevenYears,
            Self::SevenToFifteenYears,
            Self::FifteenPlusYears,
        ]
    }

    /// Points this answer contributes to the risk score
    pub fn points(&self) -> u8 {
        match self {
            Self::OneToThreeYears => 0,
            Self::ThreeToSevenYears => 1,
            Self::SevenToFifteenYears => 2,
            Self::FifteenPlusYears => 3,
        }
    }

    /// Parse from string ("1-3", "3-7", "7-15", "15+")
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let s = s.trim_end_matches("years").trim_end_matches('y').trim();
        match s {
            "1-3" => Some(Self::OneToThreeYears),
            "3-7" => Some(Self::ThreeToSevenYears),
            "7-15" => Some(Self::SevenToFifteenYears),
            "15+" => Some(Self::FifteenPlusYears),
            _ => None,
        }
    }
}

impl fmt::Display for InvestmentHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneToThreeYears => write!(f, "1-3 years"),
            Self::ThreeToSevenYears => write!(f, "3-7 years"),
            Self::SevenToFifteenYears => write!(f, "7-15 years"),
            Self::FifteenPlusYears => write!(f, "15+ years"),
        }
    }
}

/// Q3: how stable the user's income is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeStability {
    NotStable,
    SomewhatStable,
    Stable,
    VeryStable,
}

impl IncomeStability {
    /// Question text shown to the user
    pub const QUESTION: &'static str = "How stable is your income?";

    /// All answers in menu order
    pub fn all() -> &'static [IncomeStability] {
        &[
            Self::NotStable,
            Self::SomewhatStable,
            Self::Stable,
            Self::VeryStable,
        ]
    }

    /// Points this answer contributes to the risk score
    pub fn points(&self) -> u8 {
        match self {
            Self::NotStable => 0,
            Self::SomewhatStable => 1,
            Self::Stable => 2,
            Self::VeryStable => 3,
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "not-stable" | "unstable" => Some(Self::NotStable),
            "somewhat-stable" | "somewhat" => Some(Self::SomewhatStable),
            "stable" => Some(Self::Stable),
            "very-stable" => Some(Self::VeryStable),
            _ => None,
        }
    }
}

impl fmt::Display for IncomeStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStable => write!(f, "Not stable"),
            Self::SomewhatStable => write!(f, "Somewhat stable"),
            Self::Stable => write!(f, "Stable"),
            Self::VeryStable => write!(f, "Very stable"),
        }
    }
}

/// The three questionnaire answers together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAnswers {
    pub reaction: DrawdownReaction,
    pub horizon: InvestmentHorizon,
    pub stability: IncomeStability,
}

/// Risk-style category summarizing tolerance for volatility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RiskStyle {
    Conservative,
    #[default]
    Balanced,
    Growth,
    Aggressive,
}

impl RiskStyle {
    /// Map a score to its style; bands are inclusive and checked in order
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => Self::Conservative,
            4..=6 => Self::Balanced,
            7..=9 => Self::Growth,
            _ => Self::Aggressive,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Some(Self::Conservative),
            "balanced" => Some(Self::Balanced),
            "growth" => Some(Self::Growth),
            "aggressive" => Some(Self::Aggressive),
            _ => None,
        }
    }
}

impl fmt::Display for RiskStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservative => write!(f, "Conservative"),
            Self::Balanced => write!(f, "Balanced"),
            Self::Growth => write!(f, "Growth"),
            Self::Aggressive => write!(f, "Aggressive"),
        }
    }
}

/// Outcome of the risk questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Sum of answer points (0-9)
    pub score: u8,
    pub style: RiskStyle,
}

impl ReportSection for RiskResult {
    fn title(&self) -> &'static str {
        "RISK"
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("risk_score", FieldValue::Integer(i64::from(self.score))),
            ("risk_style", FieldValue::Text(self.style.to_string())),
        ]
    }

    fn explanation(&self, mode: ExplanationMode) -> &'static str {
        match mode {
            ExplanationMode::Beginner => {
                "A higher score means you can likely handle bigger ups and downs."
            }
            ExplanationMode::Intermediate => {
                "Your style sets the stock/bond/cash mix suggested in your plan."
            }
            ExplanationMode::Advanced => {
                "Tolerance is only one input; capacity for risk depends on your whole balance sheet."
            }
        }
    }
}
