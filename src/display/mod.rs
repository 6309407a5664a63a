//! Display formatting for terminal output
//!
//! Provides utilities for formatting profiles and calculation results for
//! terminal display.

pub mod format;
pub mod profile;
pub mod results;

pub use format::{format_currency, format_header, format_rate, humanize_label, separator};
pub use profile::{format_profile_details, format_profile_list};
pub use results::{
    format_explanation, format_field_value, format_goal, format_plan, format_risk_result,
    format_simulation,
};
