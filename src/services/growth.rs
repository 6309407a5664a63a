//! Growth simulator
//!
//! Month-by-month compounding projection with a single scripted downturn.
//! The simulation is deterministic: the same inputs always give the same
//! balances.

use crate::models::{SimulationInput, SimulationResult};

/// Annual inflation used to deflate the ending balance
pub const INFLATION_RATE: f64 = 0.03;

/// Month in which the downturn hits
pub const DOWNTURN_MONTH: u64 = 18;

/// Horizons of this many months or fewer skip the downturn
pub const DOWNTURN_MIN_HORIZON_MONTHS: u64 = 24;

/// Fraction of the balance kept after the downturn (a 25% drop)
pub const DOWNTURN_RETAINED: f64 = 0.75;

/// Convert an annual return into the equivalent monthly compounding rate
pub fn monthly_rate(annual_return: f64) -> f64 {
    (1.0 + annual_return).powf(1.0 / 12.0) - 1.0
}

/// Run the projection
///
/// Each month the contribution is added first, then the downturn is applied
/// if this is the downturn month, then the month's growth. Horizons are not
/// capped here; callers bound `years` (see `MAX_YEARS`) and extreme inputs
/// can overflow the balance to infinity.
pub fn simulate(input: &SimulationInput) -> SimulationResult {
    let annual_return = input.scenario.annual_return();
    let rate = monthly_rate(annual_return);
    let months = u64::from(input.years) * 12;

    let downturn_month = (months > DOWNTURN_MIN_HORIZON_MONTHS).then_some(DOWNTURN_MONTH);

    let mut balance = input.starting_balance;
    let mut total_contributions = 0.0;

    for month in 1..=months {
        balance += input.monthly_contribution;
        total_contributions += input.monthly_contribution;

        if downturn_month == Some(month) {
            balance *= DOWNTURN_RETAINED;
        }

        balance *= 1.0 + rate;
    }

    let ending_real = balance / (1.0 + INFLATION_RATE).powf(f64::from(input.years));

    SimulationResult {
        years: input.years,
        monthly_contribution: input.monthly_contribution,
        starting_balance: input.starting_balance,
        scenario: input.scenario,
        annual_return,
        ending_nominal: balance,
        ending_real,
        total_contributions,
        downturn_applied: downturn_month.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scenario;

    fn input(years: u32, monthly: f64, starting: f64, scenario: Scenario) -> SimulationInput {
        SimulationInput {
            years,
            monthly_contribution: monthly,
            starting_balance: starting,
            scenario,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_monthly_rate_compounds_to_annual() {
        let rate = monthly_rate(0.07);
        assert_close(rate, 0.005654145387405274);
        assert_close((1.0 + rate).powi(12), 1.07);
    }

    #[test]
    fn test_one_year_base_no_downturn() {
        let result = simulate(&input(1, 100.0, 0.0, Scenario::Base));

        assert!(!result.downturn_applied);
        assert_close(result.total_contributions, 1200.0);
        assert_eq!(result.annual_return, 0.07);

        // Contribution lands before each month's growth
        let rate = monthly_rate(0.07);
        let expected: f64 = (1..=12).map(|k| 100.0 * (1.0 + rate).powi(k)).sum();
        assert_close(result.ending_nominal, expected);
        assert!((result.ending_nominal - 1245.03).abs() < 0.01);
        assert_close(result.ending_real, result.ending_nominal / 1.03);
    }

    #[test]
    fn test_three_year_low_applies_one_downturn() {
        let result = simulate(&input(3, 0.0, 10000.0, Scenario::Low));

        assert!(result.downturn_applied);
        assert_eq!(result.total_contributions, 0.0);
        // 36 months of growth at 4% a year, cut by 25% exactly once
        assert!((result.ending_nominal - 10000.0 * 1.04_f64.powi(3) * 0.75).abs() < 1e-6);
        assert_close(result.ending_real, result.ending_nominal / 1.03_f64.powi(3));
    }

    #[test]
    fn test_two_year_horizon_skips_downturn() {
        let result = simulate(&input(2, 0.0, 10000.0, Scenario::Low));
        assert!(!result.downturn_applied);
        assert!((result.ending_nominal - 10000.0 * 1.04_f64.powi(2)).abs() < 1e-6);
    }

    #[test]
    fn test_downturn_hits_after_contribution_before_growth() {
        let result = simulate(&input(3, 100.0, 0.0, Scenario::High));

        let rate = monthly_rate(0.10);
        let mut expected = 0.0;
        for month in 1..=36 {
            expected += 100.0;
            if month == 18 {
                expected *= 0.75;
            }
            expected *= 1.0 + rate;
        }
        assert_close(result.ending_nominal, expected);
        assert_close(result.total_contributions, 3600.0);
    }

    #[test]
    fn test_deterministic() {
        let inputs = input(25, 350.0, 1234.5, Scenario::High);
        let first = simulate(&inputs);
        let second = simulate(&inputs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_inputs_are_echoed() {
        let result = simulate(&input(10, 200.0, 50.0, Scenario::Base));
        assert_eq!(result.years, 10);
        assert_eq!(result.monthly_contribution, 200.0);
        assert_eq!(result.starting_balance, 50.0);
        assert_eq!(result.scenario, Scenario::Base);
    }

    #[test]
    fn test_longest_horizon_stays_finite() {
        let result = simulate(&input(crate::models::MAX_YEARS, 200.0, 0.0, Scenario::High));
        assert!(result.ending_nominal.is_finite());
        assert!(result.ending_real.is_finite());
        assert_close(result.total_contributions, 200.0 * 1200.0);
    }

    #[test]
    fn test_real_value_below_nominal() {
        let result = simulate(&input(30, 500.0, 0.0, Scenario::Base));
        assert!(result.ending_real < result.ending_nominal);
        assert!(result.ending_nominal > result.total_contributions);
    }
}
