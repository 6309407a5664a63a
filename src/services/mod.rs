//! Service layer for Wealth Advisor
//!
//! The calculators (`risk`, `budget`, `growth`, `goal`) are pure functions
//! over plain values. `ProfileService` applies them to a stored profile and
//! persists the results.

pub mod budget;
pub mod goal;
pub mod growth;
pub mod profile;
pub mod risk;

pub use budget::build_plan;
pub use goal::plan_goal;
pub use growth::simulate;
pub use profile::ProfileService;
pub use risk::assess_risk;
