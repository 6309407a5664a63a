//! Analysis CLI commands
//!
//! Risk quiz, plan, growth simulation and goal planning against the active
//! profile. Each result is stored on the profile before it is printed.

use clap::Args;
use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::display::{format_goal, format_plan, format_risk_result, format_simulation};
use crate::error::{AdvisorError, AdvisorResult};
use crate::models::{
    DrawdownReaction, IncomeStability, InvestmentHorizon, RiskAnswers, Scenario, SimulationInput,
    MAX_YEARS,
};
use crate::services::ProfileService;
use crate::session::Session;
use crate::storage::Storage;

use super::prompt::Prompter;

/// Risk quiz answers; any left out are asked interactively
#[derive(Args, Debug, Default)]
pub struct RiskArgs {
    /// After a 20% drop: sell-everything, sell-some, hold, buy-more
    #[arg(long)]
    pub reaction: Option<String>,
    /// Investment horizon: 1-3, 3-7, 7-15, 15+
    #[arg(long)]
    pub horizon: Option<String>,
    /// Income stability: not-stable, somewhat-stable, stable, very-stable
    #[arg(long)]
    pub stability: Option<String>,
}

/// Growth simulation inputs
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Years to invest (1 to 100)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_YEARS)))]
    pub years: u32,
    /// Monthly contribution
    #[arg(long, default_value_t = 200.0)]
    pub monthly: f64,
    /// Starting balance
    #[arg(long, default_value_t = 0.0)]
    pub starting: f64,
    /// Market scenario: low, base, high
    #[arg(long, default_value = "base")]
    pub scenario: String,
}

/// Savings goal inputs
#[derive(Args, Debug)]
pub struct GoalArgs {
    /// Goal label (Emergency Fund, Down Payment, Car, Retirement, Custom, ...)
    #[arg(long = "goal-type", default_value = "Emergency Fund")]
    pub goal_type: String,
    /// Target amount
    #[arg(long, default_value_t = 10000.0)]
    pub target: f64,
    /// Years to reach it (1 to 100)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_YEARS)))]
    pub years: u32,
}

fn parse_or_pick<'a, T, R, W>(
    prompter: &mut Prompter<R, W>,
    given: Option<&str>,
    parse: fn(&str) -> Option<T>,
    question: &str,
    options: &'a [T],
) -> AdvisorResult<T>
where
    T: Copy + Display,
    R: BufRead,
    W: Write,
{
    match given {
        Some(raw) => parse(raw).ok_or_else(|| {
            let valid: Vec<String> = options.iter().map(|o| o.to_string()).collect();
            AdvisorError::Validation(format!(
                "Invalid answer '{}' for \"{}\". Valid answers: {}",
                raw,
                question,
                valid.join(", ")
            ))
        }),
        None => prompter.pick(question, options).copied(),
    }
}

/// Collect the three quiz answers, asking for any not supplied
pub fn collect_risk_answers<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    args: &RiskArgs,
) -> AdvisorResult<RiskAnswers> {
    Ok(RiskAnswers {
        reaction: parse_or_pick(
            prompter,
            args.reaction.as_deref(),
            DrawdownReaction::parse,
            DrawdownReaction::QUESTION,
            DrawdownReaction::all(),
        )?,
        horizon: parse_or_pick(
            prompter,
            args.horizon.as_deref(),
            InvestmentHorizon::parse,
            InvestmentHorizon::QUESTION,
            InvestmentHorizon::all(),
        )?,
        stability: parse_or_pick(
            prompter,
            args.stability.as_deref(),
            IncomeStability::parse,
            IncomeStability::QUESTION,
            IncomeStability::all(),
        )?,
    })
}

/// Handle the risk command
pub fn handle_risk_command<R: BufRead, W: Write>(
    storage: &Storage,
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
    args: RiskArgs,
) -> AdvisorResult<()> {
    // Fail before asking anything if there is no profile
    session.profile()?;

    let answers = collect_risk_answers(prompter, &args)?;
    let mode = session.mode;
    let result = ProfileService::new(storage).assess_risk(session.profile_mut()?, &answers)?;

    print!("{}", format_risk_result(&result, mode));
    Ok(())
}

/// Handle the plan command
pub fn handle_plan_command(storage: &Storage, session: &mut Session, symbol: &str) -> AdvisorResult<()> {
    let mode = session.mode;
    let plan = ProfileService::new(storage).build_plan(session.profile_mut()?)?;

    print!("{}", format_plan(&plan, mode, symbol));
    Ok(())
}

/// Handle the simulate command
pub fn handle_simulate_command(
    storage: &Storage,
    session: &mut Session,
    args: SimulateArgs,
    symbol: &str,
) -> AdvisorResult<()> {
    let scenario = Scenario::parse(&args.scenario).ok_or_else(|| {
        AdvisorError::Validation(format!(
            "Invalid scenario: '{}'. Valid scenarios: low, base, high",
            args.scenario
        ))
    })?;

    let input = SimulationInput {
        years: args.years,
        monthly_contribution: args.monthly,
        starting_balance: args.starting,
        scenario,
    };

    let mode = session.mode;
    let result = ProfileService::new(storage).simulate(session.profile_mut()?, &input)?;

    print!("{}", format_simulation(&result, mode, symbol));
    Ok(())
}

/// Handle the goal command
pub fn handle_goal_command(
    storage: &Storage,
    session: &mut Session,
    args: GoalArgs,
    symbol: &str,
) -> AdvisorResult<()> {
    let mode = session.mode;
    let goal = ProfileService::new(storage).plan_goal(
        session.profile_mut()?,
        &args.goal_type,
        args.target,
        args.years,
    )?;

    print!("{}", format_goal(&goal, mode, symbol));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_answers_from_flags() {
        let args = RiskArgs {
            reaction: Some("hold".to_string()),
            horizon: Some("15+".to_string()),
            stability: Some("very-stable".to_string()),
        };
        let mut p = prompter("");
        let answers = collect_risk_answers(&mut p, &args).unwrap();

        assert_eq!(answers.reaction, DrawdownReaction::Hold);
        assert_eq!(answers.horizon, InvestmentHorizon::FifteenPlusYears);
        assert_eq!(answers.stability, IncomeStability::VeryStable);
    }

    #[test]
    fn test_missing_answers_are_asked() {
        let args = RiskArgs {
            reaction: Some("buy-more".to_string()),
            ..RiskArgs::default()
        };
        let mut p = prompter("1\n4\n");
        let answers = collect_risk_answers(&mut p, &args).unwrap();

        assert_eq!(answers.reaction, DrawdownReaction::BuyMore);
        assert_eq!(answers.horizon, InvestmentHorizon::OneToThreeYears);
        assert_eq!(answers.stability, IncomeStability::VeryStable);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains(InvestmentHorizon::QUESTION));
        assert!(!out.contains(DrawdownReaction::QUESTION));
    }

    #[test]
    fn test_invalid_flag_is_validation_error() {
        let args = RiskArgs {
            reaction: Some("panic".to_string()),
            ..RiskArgs::default()
        };
        let mut p = prompter("");
        let err = collect_risk_answers(&mut p, &args).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Buy more"));
    }
}
