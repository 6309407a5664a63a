//! Profile display formatting
//!
//! Formats profiles for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Profile;

use super::format::format_currency;
use super::results::format_field_value;

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "")]
    active: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Age")]
    age: u32,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Risk Style")]
    risk_style: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

/// Format a list of profiles as a table, marking the active one with `*`
pub fn format_profile_list(profiles: &[Profile], active: Option<&str>, symbol: &str) -> String {
    if profiles.is_empty() {
        return "No saved profiles.".to_string();
    }

    let rows = profiles.iter().map(|profile| ProfileRow {
        active: if active.is_some_and(|name| name.eq_ignore_ascii_case(&profile.name)) {
            "*"
        } else {
            ""
        },
        name: profile.name.clone(),
        age: profile.age,
        income: format_currency(profile.finances.monthly_income, symbol),
        expenses: format_currency(profile.finances.monthly_expenses, symbol),
        risk_style: profile
            .risk_style
            .map(|style| style.to_string())
            .unwrap_or_else(|| "-".to_string()),
        updated: profile.updated_at.format("%Y-%m-%d %H:%M").to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a single profile's details, including stored results
pub fn format_profile_details(profile: &Profile, symbol: &str) -> String {
    let finances = &profile.finances;
    let mut output = String::new();

    output.push_str(&format!("Profile: {}\n", profile.name));
    output.push_str(&format!("  Age:              {}\n", profile.age));
    output.push_str(&format!(
        "  Monthly income:   {}\n",
        format_currency(finances.monthly_income, symbol)
    ));
    output.push_str(&format!(
        "  Monthly expenses: {}\n",
        format_currency(finances.monthly_expenses, symbol)
    ));
    output.push_str(&format!(
        "  Cash savings:     {}\n",
        format_currency(finances.cash_savings, symbol)
    ));
    output.push_str(&format!(
        "  Total debt:       {}\n",
        format_currency(finances.total_debt, symbol)
    ));
    output.push_str(&format!("  Debt APR:         {}%\n", finances.debt_apr));
    output.push_str(&format!(
        "  Created:          {}\n",
        profile.created_at.format("%Y-%m-%d %H:%M")
    ));

    for section in profile.sections() {
        output.push_str(&format!("\n{}:\n", section.title()));
        for (label, value) in section.fields() {
            output.push_str(&format!("  {}: {}\n", label, format_field_value(&value, symbol)));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialInputs, RiskResult, RiskStyle};

    #[test]
    fn test_empty_list() {
        assert_eq!(format_profile_list(&[], None, "$"), "No saved profiles.");
    }

    #[test]
    fn test_list_marks_active_profile() {
        let profiles = vec![
            Profile::new("Alice", 30, FinancialInputs::default()),
            Profile::new("Bob", 45, FinancialInputs::default()),
        ];
        let output = format_profile_list(&profiles, Some("bob"), "$");

        assert!(output.contains("Alice"));
        assert!(output.contains("$3,500.00"));
        let bob_line = output.lines().find(|l| l.contains("Bob")).unwrap();
        assert!(bob_line.contains('*'));
        let alice_line = output.lines().find(|l| l.contains("Alice")).unwrap();
        assert!(!alice_line.contains('*'));
    }

    #[test]
    fn test_details_include_sections() {
        let mut profile = Profile::new("Alice", 30, FinancialInputs::default());
        let plain = format_profile_details(&profile, "$");
        assert!(plain.contains("Monthly income:   $3,500.00"));
        assert!(!plain.contains("RISK"));

        profile.set_risk(RiskResult {
            score: 5,
            style: RiskStyle::Balanced,
        });
        let with_risk = format_profile_details(&profile, "$");
        assert!(with_risk.contains("RISK:"));
        assert!(with_risk.contains("risk_style: Balanced"));
    }
}
