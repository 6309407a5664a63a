//! Configuration module for Wealth Advisor
//!
//! - Data directory resolution (profiles, reports, audit log)
//! - User settings persistence (explanation mode, active profile)

pub mod paths;
pub mod settings;

pub use paths::AdvisorPaths;
pub use settings::Settings;
