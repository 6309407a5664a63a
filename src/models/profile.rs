//! Financial profile model
//!
//! A profile holds the user's identity, monthly figures, and the latest
//! result of each calculation as a named section.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::goal::GoalResult;
use super::plan::PlanResult;
use super::risk::{RiskResult, RiskStyle};
use super::section::ReportSection;
use super::simulation::SimulationResult;

/// Youngest age accepted for a profile
pub const MIN_AGE: u32 = 13;

/// Longest horizon, in years, for simulations and goals
pub const MAX_YEARS: u32 = 100;

/// Financial inputs collected when a profile is created
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialInputs {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub cash_savings: f64,
    pub total_debt: f64,
    /// Average APR in percent (e.g. 18.5)
    pub debt_apr: f64,
}

impl Default for FinancialInputs {
    fn default() -> Self {
        Self {
            monthly_income: 3500.0,
            monthly_expenses: 2500.0,
            cash_savings: 500.0,
            total_debt: 0.0,
            debt_apr: 0.0,
        }
    }
}

/// A user's financial profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name, also the storage key
    pub name: String,

    pub age: u32,

    #[serde(flatten)]
    pub finances: FinancialInputs,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_style: Option<RiskStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_plan: Option<PlanResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_simulation: Option<SimulationResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_goal: Option<GoalResult>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile with no derived sections
    pub fn new(name: impl Into<String>, age: u32, finances: FinancialInputs) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            age,
            finances,
            risk_score: None,
            risk_style: None,
            latest_plan: None,
            latest_simulation: None,
            latest_goal: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The stored risk result, if the questionnaire has been taken
    pub fn risk(&self) -> Option<RiskResult> {
        match (self.risk_score, self.risk_style) {
            (Some(score), Some(style)) => Some(RiskResult { score, style }),
            _ => None,
        }
    }

    /// Risk style to plan with; Balanced until the questionnaire is taken
    pub fn effective_risk_style(&self) -> RiskStyle {
        self.risk_style.unwrap_or_default()
    }

    /// Record a risk result
    pub fn set_risk(&mut self, result: RiskResult) {
        self.risk_score = Some(result.score);
        self.risk_style = Some(result.style);
        self.updated_at = Utc::now();
    }

    /// Record a plan
    pub fn set_plan(&mut self, plan: PlanResult) {
        self.latest_plan = Some(plan);
        self.updated_at = Utc::now();
    }

    /// Record a simulation
    pub fn set_simulation(&mut self, simulation: SimulationResult) {
        self.latest_simulation = Some(simulation);
        self.updated_at = Utc::now();
    }

    /// Record a goal
    pub fn set_goal(&mut self, goal: GoalResult) {
        self.latest_goal = Some(goal);
        self.updated_at = Utc::now();
    }

    /// Stored result sections in report order (risk, plan, simulation, goal)
    pub fn sections(&self) -> Vec<Box<dyn ReportSection>> {
        let mut sections: Vec<Box<dyn ReportSection>> = Vec::new();
        if let Some(risk) = self.risk() {
            sections.push(Box::new(risk));
        }
        if let Some(plan) = &self.latest_plan {
            sections.push(Box::new(plan.clone()));
        }
        if let Some(simulation) = &self.latest_simulation {
            sections.push(Box::new(simulation.clone()));
        }
        if let Some(goal) = &self.latest_goal {
            sections.push(Box::new(goal.clone()));
        }
        sections
    }

    /// Validate the profile
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyName);
        }

        if self.age < MIN_AGE {
            return Err(ProfileValidationError::TooYoung(self.age));
        }

        let amounts = [
            ("monthly_income", self.finances.monthly_income),
            ("monthly_expenses", self.finances.monthly_expenses),
            ("cash_savings", self.finances.cash_savings),
            ("total_debt", self.finances.total_debt),
            ("debt_apr", self.finances.debt_apr),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(ProfileValidationError::NotFinite(field));
            }
            if value < 0.0 {
                return Err(ProfileValidationError::Negative(field));
            }
        }

        match (self.risk_score, self.risk_style) {
            (None, None) => {}
            (Some(score), Some(style)) => {
                if score > 9 {
                    return Err(ProfileValidationError::RiskScoreOutOfRange(score));
                }
                let expected = RiskStyle::from_score(score);
                if style != expected {
                    return Err(ProfileValidationError::RiskStyleMismatch { score, style });
                }
            }
            _ => return Err(ProfileValidationError::IncompleteRisk),
        }

        if let Some(plan) = &self.latest_plan {
            check_finite(&[
                ("latest_plan.surplus", plan.surplus),
                ("latest_plan.emergency_fund.low", plan.emergency_fund.low),
                ("latest_plan.emergency_fund.high", plan.emergency_fund.high),
                ("latest_plan.budget_split.needs", plan.budget_split.needs),
                ("latest_plan.budget_split.wants", plan.budget_split.wants),
                ("latest_plan.budget_split.save_invest", plan.budget_split.save_invest),
            ])?;
        }

        if let Some(simulation) = &self.latest_simulation {
            check_years("latest_simulation.years", simulation.years)?;
            check_finite(&[
                ("latest_simulation.monthly_contribution", simulation.monthly_contribution),
                ("latest_simulation.starting_balance", simulation.starting_balance),
                ("latest_simulation.annual_return", simulation.annual_return),
                ("latest_simulation.ending_nominal", simulation.ending_nominal),
                ("latest_simulation.ending_real", simulation.ending_real),
                ("latest_simulation.total_contributions", simulation.total_contributions),
            ])?;
        }

        if let Some(goal) = &self.latest_goal {
            check_years("latest_goal.years", goal.years)?;
            check_finite(&[
                ("latest_goal.target", goal.target),
                ("latest_goal.monthly_needed", goal.monthly_needed),
            ])?;
        }

        Ok(())
    }
}

fn check_finite(values: &[(&'static str, f64)]) -> Result<(), ProfileValidationError> {
    match values.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, _)) => Err(ProfileValidationError::NotFinite(*field)),
        None => Ok(()),
    }
}

fn check_years(field: &'static str, years: u32) -> Result<(), ProfileValidationError> {
    if (1..=MAX_YEARS).contains(&years) {
        Ok(())
    } else {
        Err(ProfileValidationError::YearsOutOfRange(field, years))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (age {})", self.name, self.age)
    }
}

/// Validation errors for profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    EmptyName,
    TooYoung(u32),
    Negative(&'static str),
    NotFinite(&'static str),
    RiskScoreOutOfRange(u8),
    RiskStyleMismatch { score: u8, style: RiskStyle },
    IncompleteRisk,
    YearsOutOfRange(&'static str, u32),
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Profile name cannot be empty"),
            Self::TooYoung(age) => write!(f, "Age must be at least {} (got {})", MIN_AGE, age),
            Self::Negative(field) => write!(f, "{} cannot be negative", field),
            Self::NotFinite(field) => write!(f, "{} must be a finite number", field),
            Self::RiskScoreOutOfRange(score) => {
                write!(f, "Risk score must be between 0 and 9 (got {})", score)
            }
            Self::RiskStyleMismatch { score, style } => write!(
                f,
                "Risk style {} does not match score {} (expected {})",
                style,
                score,
                RiskStyle::from_score(*score)
            ),
            Self::IncompleteRisk => {
                write!(f, "risk_score and risk_style must be set together")
            }
            Self::YearsOutOfRange(field, years) => write!(
                f,
                "{} must be between 1 and {} (got {})",
                field, MAX_YEARS, years
            ),
        }
    }
}

impl std::error::Error for ProfileValidationError {}
