//! Reports module for Wealth Advisor
//!
//! Text reports summarizing a profile and its latest results.

pub mod profile_report;

pub use profile_report::{ProfileReport, REPORT_DISCLAIMER, REPORT_TITLE};
