//! Goal planner

use crate::models::GoalResult;

/// Monthly amount needed to reach `target` in `years`, assuming no growth
///
/// `years` must be at least 1; the CLI and prompts enforce that before
/// calling in.
pub fn plan_goal(goal_type: impl Into<String>, target: f64, years: u32) -> GoalResult {
    let months = f64::from(years * 12);

    GoalResult {
        goal_type: goal_type.into(),
        target,
        years,
        monthly_needed: target / months,
    }
}
