//! Budget plan results
//!
//! Output of the budget advisor: surplus, emergency fund target,
//! 50/30/20 split, debt strategy, allocation and warnings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::mode::ExplanationMode;
use super::risk::RiskStyle;
use super::section::{FieldValue, ReportSection};

/// Debt repayment ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtStrategy {
    /// Highest interest first
    Avalanche,
    /// Smallest balance first
    Snowball,
}

impl fmt::Display for DebtStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Avalanche => write!(f, "Avalanche (pay highest interest debt first)"),
            Self::Snowball => write!(f, "Snowball (pay smallest balance first)"),
        }
    }
}

/// Suggested portfolio mix in whole percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub stock_pct: u8,
    pub bond_pct: u8,
    pub cash_pct: u8,
}

impl Allocation {
    /// Allocation for a risk style
    pub fn for_style(style: RiskStyle) -> Self {
        let (stock_pct, bond_pct, cash_pct) = match style {
            RiskStyle::Conservative => (40, 50, 10),
            RiskStyle::Balanced => (60, 35, 5),
            RiskStyle::Growth => (80, 15, 5),
            RiskStyle::Aggressive => (90, 5, 5),
        };
        Self {
            stock_pct,
            bond_pct,
            cash_pct,
        }
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% Stocks / {}% Bonds / {}% Cash",
            self.stock_pct, self.bond_pct, self.cash_pct
        )
    }
}

/// Conditions the plan flags for the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanWarning {
    ExpensesExceedIncome,
    LowSavings,
    HighInterestDebt,
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpensesExceedIncome => write!(
                f,
                "Your expenses are higher than your income. Cut spending or increase income first."
            ),
            Self::LowSavings => write!(
                f,
                "You have less than 1 month of savings. Build emergency fund first."
            ),
            Self::HighInterestDebt => write!(
                f,
                "High-interest debt detected. Paying it off is usually the best 'investment'."
            ),
        }
    }
}

/// Emergency fund target range (3 to 6 months of expenses)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundRange {
    pub low: f64,
    pub high: f64,
}

/// 50/30/20 budget split of monthly income
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSplit {
    pub needs: f64,
    pub wants: f64,
    pub save_invest: f64,
}

/// A complete mini financial plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub surplus: f64,
    pub emergency_fund: EmergencyFundRange,
    pub budget_split: BudgetSplit,
    pub debt_strategy: DebtStrategy,
    /// Style the allocation was looked up with
    pub allocation_style: RiskStyle,
    pub allocation: Allocation,
    #[serde(default)]
    pub warnings: Vec<PlanWarning>,
}

impl ReportSection for PlanResult {
    fn title(&self) -> &'static str {
        "LATEST PLAN"
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("surplus", FieldValue::Money(self.surplus)),
            (
                "emergency_fund",
                FieldValue::MoneyRange(self.emergency_fund.low, self.emergency_fund.high),
            ),
            ("needs", FieldValue::Money(self.budget_split.needs)),
            ("wants", FieldValue::Money(self.budget_split.wants)),
            ("save_invest", FieldValue::Money(self.budget_split.save_invest)),
            ("debt_strategy", FieldValue::Text(self.debt_strategy.to_string())),
            (
                "allocation",
                FieldValue::Text(format!("{} ({})", self.allocation, self.allocation_style)),
            ),
            (
                "warnings",
                FieldValue::List(self.warnings.iter().map(|w| w.to_string()).collect()),
            ),
        ]
    }

    fn explanation(&self, mode: ExplanationMode) -> &'static str {
        match mode {
            ExplanationMode::Beginner => {
                "This plan starts with safety (emergency fund), then debt, then investing."
            }
            ExplanationMode::Intermediate => {
                "This plan prioritizes match > emergency fund > high-interest debt > investing."
            }
            ExplanationMode::Advanced => {
                "This plan considers opportunity cost, inflation, and risk management."
            }
        }
    }
}
