//! Budget advisor
//!
//! Rule engine producing the mini financial plan: surplus, emergency fund
//! range, 50/30/20 split, debt strategy, allocation and warnings.

use crate::models::{
    Allocation, BudgetSplit, DebtStrategy, EmergencyFundRange, FinancialInputs, PlanResult,
    PlanWarning, RiskStyle,
};

/// APR (percent) at or above which the avalanche method is suggested
pub const AVALANCHE_APR_THRESHOLD: f64 = 8.0;

/// APR (percent) at or above which outstanding debt is flagged
pub const HIGH_INTEREST_APR_THRESHOLD: f64 = 10.0;

const NEEDS_SHARE: f64 = 0.50;
const WANTS_SHARE: f64 = 0.30;
const SAVE_INVEST_SHARE: f64 = 0.20;

/// Build a plan from the profile's figures and risk style
pub fn build_plan(finances: &FinancialInputs, style: RiskStyle) -> PlanResult {
    let income = finances.monthly_income;
    let expenses = finances.monthly_expenses;

    let surplus = income - expenses;

    PlanResult {
        surplus,
        emergency_fund: EmergencyFundRange {
            low: expenses * 3.0,
            high: expenses * 6.0,
        },
        budget_split: BudgetSplit {
            needs: income * NEEDS_SHARE,
            wants: income * WANTS_SHARE,
            save_invest: income * SAVE_INVEST_SHARE,
        },
        debt_strategy: debt_strategy(finances.debt_apr),
        allocation_style: style,
        allocation: Allocation::for_style(style),
        warnings: collect_warnings(finances, surplus),
    }
}

/// Pick a repayment ordering from the average APR
pub fn debt_strategy(debt_apr: f64) -> DebtStrategy {
    if debt_apr >= AVALANCHE_APR_THRESHOLD {
        DebtStrategy::Avalanche
    } else {
        DebtStrategy::Snowball
    }
}

/// Every check runs; order is surplus, savings, debt
fn collect_warnings(finances: &FinancialInputs, surplus: f64) -> Vec<PlanWarning> {
    let mut warnings = Vec::new();

    if surplus < 0.0 {
        warnings.push(PlanWarning::ExpensesExceedIncome);
    }
    if finances.cash_savings < finances.monthly_expenses {
        warnings.push(PlanWarning::LowSavings);
    }
    if finances.total_debt > 0.0 && finances.debt_apr >= HIGH_INTEREST_APR_THRESHOLD {
        warnings.push(PlanWarning::HighInterestDebt);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finances(income: f64, expenses: f64, savings: f64, debt: f64, apr: f64) -> FinancialInputs {
        FinancialInputs {
            monthly_income: income,
            monthly_expenses: expenses,
            cash_savings: savings,
            total_debt: debt,
            debt_apr: apr,
        }
    }

    #[test]
    fn test_basic_plan() {
        let plan = build_plan(&finances(3500.0, 2500.0, 500.0, 0.0, 0.0), RiskStyle::Balanced);

        assert_eq!(plan.surplus, 1000.0);
        assert_eq!(plan.emergency_fund.low, 7500.0);
        assert_eq!(plan.emergency_fund.high, 15000.0);
        assert_eq!(plan.budget_split.needs, 1750.0);
        assert_eq!(plan.budget_split.wants, 1050.0);
        assert_eq!(plan.budget_split.save_invest, 700.0);
        assert_eq!(plan.debt_strategy, DebtStrategy::Snowball);
        assert_eq!(plan.allocation, Allocation::for_style(RiskStyle::Balanced));
        assert_eq!(plan.warnings, vec![PlanWarning::LowSavings]);
    }

    #[test]
    fn test_split_sums_to_income() {
        for income in [0.0, 1.0, 999.99, 3500.0, 12345.67, 1_000_000.0] {
            let plan = build_plan(&finances(income, 0.0, 0.0, 0.0, 0.0), RiskStyle::Growth);
            let split = plan.budget_split;
            let total = split.needs + split.wants + split.save_invest;
            assert!(
                (total - income).abs() <= income * 1e-12,
                "split of {} summed to {}",
                income,
                total
            );
        }
    }

    #[test]
    fn test_debt_strategy_boundary() {
        assert_eq!(debt_strategy(7.99), DebtStrategy::Snowball);
        assert_eq!(debt_strategy(8.0), DebtStrategy::Avalanche);
        assert_eq!(debt_strategy(24.0), DebtStrategy::Avalanche);
        assert_eq!(debt_strategy(0.0), DebtStrategy::Snowball);
    }

    #[test]
    fn test_no_warnings_when_healthy() {
        let plan = build_plan(
            &finances(5000.0, 2000.0, 10000.0, 1000.0, 4.0),
            RiskStyle::Conservative,
        );
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_all_warnings_in_order() {
        let plan = build_plan(
            &finances(2000.0, 3000.0, 100.0, 5000.0, 22.0),
            RiskStyle::Balanced,
        );
        assert_eq!(
            plan.warnings,
            vec![
                PlanWarning::ExpensesExceedIncome,
                PlanWarning::LowSavings,
                PlanWarning::HighInterestDebt,
            ]
        );
    }

    #[test]
    fn test_warnings_are_monotonic() {
        let only_savings = build_plan(
            &finances(4000.0, 3000.0, 100.0, 0.0, 0.0),
            RiskStyle::Balanced,
        );
        assert_eq!(only_savings.warnings, vec![PlanWarning::LowSavings]);

        // Pushing expenses over income adds a warning without removing any
        let savings_and_surplus = build_plan(
            &finances(2500.0, 3000.0, 100.0, 0.0, 0.0),
            RiskStyle::Balanced,
        );
        for warning in &only_savings.warnings {
            assert!(savings_and_surplus.warnings.contains(warning));
        }
        assert_eq!(
            savings_and_surplus.warnings,
            vec![PlanWarning::ExpensesExceedIncome, PlanWarning::LowSavings]
        );
    }

    #[test]
    fn test_high_interest_needs_outstanding_debt() {
        let no_debt = build_plan(&finances(4000.0, 1000.0, 5000.0, 0.0, 25.0), RiskStyle::Growth);
        assert!(!no_debt.warnings.contains(&PlanWarning::HighInterestDebt));

        let at_threshold = build_plan(
            &finances(4000.0, 1000.0, 5000.0, 100.0, 10.0),
            RiskStyle::Growth,
        );
        assert_eq!(at_threshold.warnings, vec![PlanWarning::HighInterestDebt]);

        let below = build_plan(
            &finances(4000.0, 1000.0, 5000.0, 100.0, 9.99),
            RiskStyle::Growth,
        );
        assert!(below.warnings.is_empty());
    }

    #[test]
    fn test_allocation_follows_style() {
        let plan = build_plan(&finances(1.0, 0.0, 0.0, 0.0, 0.0), RiskStyle::Aggressive);
        assert_eq!(plan.allocation_style, RiskStyle::Aggressive);
        assert_eq!(plan.allocation.stock_pct, 90);
    }
}
