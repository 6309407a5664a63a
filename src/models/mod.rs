//! Core data models for Wealth Advisor
//!
//! This module contains the data structures of the planning domain: the
//! profile, the questionnaire answers, and the result section each
//! calculation writes back onto the profile.

pub mod goal;
pub mod mode;
pub mod plan;
pub mod profile;
pub mod risk;
pub mod section;
pub mod simulation;

pub use goal::{GoalResult, SUGGESTED_GOAL_TYPES};
pub use mode::ExplanationMode;
pub use plan::{Allocation, BudgetSplit, DebtStrategy, EmergencyFundRange, PlanResult, PlanWarning};
pub use profile::{FinancialInputs, Profile, ProfileValidationError, MAX_YEARS, MIN_AGE};
pub use risk::{
    DrawdownReaction, IncomeStability, InvestmentHorizon, RiskAnswers, RiskResult, RiskStyle,
};
pub use section::{FieldValue, ReportSection};
pub use simulation::{Scenario, SimulationInput, SimulationResult};
