//! Wealth Advisor - personal finance planning from the terminal
//!
//! This library provides the core functionality for the `advisor` binary: a
//! risk questionnaire, a rule-based budget plan, a deterministic growth
//! simulator and a savings goal planner, applied to saved profiles and
//! summarized in plain-text reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Profiles, questionnaire answers and result sections
//! - `services`: The calculators and the profile service that stores results
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `session`: Active profile and explanation mode for one run
//! - `display`: Terminal formatting
//! - `reports`: Text reports
//! - `export`: Profile export and import (JSON, YAML)
//! - `cli`: Command handlers, prompts and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use wealth_advisor::models::{Scenario, SimulationInput};
//! use wealth_advisor::services::simulate;
//!
//! let result = simulate(&SimulationInput {
//!     years: 10,
//!     monthly_contribution: 200.0,
//!     starting_balance: 0.0,
//!     scenario: Scenario::Base,
//! });
//! println!("{:.2}", result.ending_real);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod storage;

pub use error::AdvisorError;
