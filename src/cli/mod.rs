//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod analysis;
pub mod config;
pub mod history;
pub mod menu;
pub mod profile;
pub mod prompt;
pub mod report;

pub use analysis::{
    handle_goal_command, handle_plan_command, handle_risk_command, handle_simulate_command,
    GoalArgs, RiskArgs, SimulateArgs,
};
pub use config::{handle_config_command, handle_mode_command};
pub use history::handle_history_command;
pub use menu::Menu;
pub use profile::{handle_profile_command, ProfileCommands};
pub use prompt::Prompter;
pub use report::handle_report_command;
