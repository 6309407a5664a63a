//! Result display formatting
//!
//! Formats each calculation result for the terminal, followed by the
//! explanation for the current mode.

use crate::models::{
    ExplanationMode, FieldValue, GoalResult, PlanResult, ReportSection, RiskResult,
    SimulationResult,
};

use super::format::{format_currency, format_rate, yes_no};

/// Render a single field value as text
///
/// Lists are joined with "; " here; multi-line layouts handle them
/// themselves.
pub fn format_field_value(value: &FieldValue, symbol: &str) -> String {
    match value {
        FieldValue::Money(amount) => format_currency(*amount, symbol),
        FieldValue::MoneyRange(low, high) => format!(
            "{} to {}",
            format_currency(*low, symbol),
            format_currency(*high, symbol)
        ),
        FieldValue::Rate(rate) => format_rate(*rate),
        FieldValue::Integer(n) => n.to_string(),
        FieldValue::Text(text) => text.clone(),
        FieldValue::List(items) if items.is_empty() => "None".to_string(),
        FieldValue::List(items) => items.join("; "),
        FieldValue::Flag(flag) => yes_no(*flag).to_string(),
    }
}

/// The "Explanation Mode" footer shown after a result
pub fn format_explanation(section: &dyn ReportSection, mode: ExplanationMode) -> String {
    format!(
        "\nExplanation Mode: {}\n{}\n",
        mode,
        section.explanation(mode)
    )
}

/// Format a risk quiz result
pub fn format_risk_result(result: &RiskResult, mode: ExplanationMode) -> String {
    let mut output = String::new();
    output.push_str(&format!("\nYour risk score: {}\n", result.score));
    output.push_str(&format!("Your risk style: {}\n", result.style));
    output.push_str(&format_explanation(result, mode));
    output
}

/// Format a mini financial plan
pub fn format_plan(plan: &PlanResult, mode: ExplanationMode, symbol: &str) -> String {
    let money = |amount: f64| format_currency(amount, symbol);
    let mut output = String::new();

    output.push_str(&format!("Monthly Surplus: {}\n", money(plan.surplus)));
    output.push_str(&format!(
        "Emergency Fund Goal: {} to {}\n",
        money(plan.emergency_fund.low),
        money(plan.emergency_fund.high)
    ));
    output.push_str("Suggested Budget (50/30/20):\n");
    output.push_str(&format!(" - Needs: {}\n", money(plan.budget_split.needs)));
    output.push_str(&format!(" - Wants: {}\n", money(plan.budget_split.wants)));
    output.push_str(&format!(
        " - Save/Invest: {}\n",
        money(plan.budget_split.save_invest)
    ));
    output.push_str(&format!("Debt Strategy: {}\n", plan.debt_strategy));
    output.push_str(&format!(
        "Suggested Portfolio Allocation (based on {}): {}\n",
        plan.allocation_style, plan.allocation
    ));

    if !plan.warnings.is_empty() {
        output.push_str("\nImportant Warnings:\n");
        for warning in &plan.warnings {
            output.push_str(&format!(" - {}\n", warning));
        }
    }

    output.push_str(&format_explanation(plan, mode));
    output
}

/// Format growth simulation results
pub fn format_simulation(result: &SimulationResult, mode: ExplanationMode, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("\nSimulation Results:\n");
    output.push_str(&format!(
        "Scenario: {} ({} per year)\n",
        result.scenario,
        format_rate(result.annual_return)
    ));
    output.push_str(&format!(
        "Total Contributions: {}\n",
        format_currency(result.total_contributions, symbol)
    ));
    output.push_str(&format!(
        "Ending Balance (normal): {}\n",
        format_currency(result.ending_nominal, symbol)
    ));
    output.push_str(&format!(
        "Ending Balance (inflation-adjusted): {}\n",
        format_currency(result.ending_real, symbol)
    ));
    output.push_str(&format!(
        "Bad year included: {}\n",
        yes_no(result.downturn_applied)
    ));

    output.push_str(&format_explanation(result, mode));
    output
}

/// Format a savings goal result
pub fn format_goal(goal: &GoalResult, mode: ExplanationMode, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("\nGoal Result:\n");
    output.push_str(&format!("Goal: {}\n", goal.goal_type));
    output.push_str(&format!("Target: {}\n", format_currency(goal.target, symbol)));
    output.push_str(&format!("Time: {} years\n", goal.years));
    output.push_str(&format!(
        "Monthly needed (simple): {}\n",
        format_currency(goal.monthly_needed, symbol)
    ));

    output.push_str(&format_explanation(goal, mode));
    output
}
