//! Risk profiler
//!
//! Turns the three questionnaire answers into a score and a risk style.

use crate::models::{RiskAnswers, RiskResult, RiskStyle};

/// Score the questionnaire
///
/// The score is the sum of the points of each answer (0-9) and the style is
/// derived from the score alone.
pub fn assess_risk(answers: &RiskAnswers) -> RiskResult {
    let score =
        answers.reaction.points() + answers.horizon.points() + answers.stability.points();

    RiskResult {
        score,
        style: RiskStyle::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrawdownReaction, IncomeStability, InvestmentHorizon};

    #[test]
    fn test_score_is_sum_for_every_combination() {
        for reaction in DrawdownReaction::all() {
            for horizon in InvestmentHorizon::all() {
                for stability in IncomeStability::all() {
                    let answers = RiskAnswers {
                        reaction: *reaction,
                        horizon: *horizon,
                        stability: *stability,
                    };
                    let result = assess_risk(&answers);
                    let expected = reaction.points() + horizon.points() + stability.points();

                    assert_eq!(result.score, expected);
                    assert!(result.score <= 9);

                    let expected_style = match expected {
                        0..=3 => RiskStyle::Conservative,
                        4..=6 => RiskStyle::Balanced,
                        _ => RiskStyle::Growth,
                    };
                    assert_eq!(result.style, expected_style);
                }
            }
        }
    }

    #[test]
    fn test_most_cautious_answers() {
        let answers = RiskAnswers {
            reaction: DrawdownReaction::SellEverything,
            horizon: InvestmentHorizon::OneToThreeYears,
            stability: IncomeStability::NotStable,
        };
        let result = assess_risk(&answers);
        assert_eq!(result.score, 0);
        assert_eq!(result.style, RiskStyle::Conservative);
    }

    #[test]
    fn test_boldest_answers_are_growth_not_aggressive() {
        let answers = RiskAnswers {
            reaction: DrawdownReaction::BuyMore,
            horizon: InvestmentHorizon::FifteenPlusYears,
            stability: IncomeStability::VeryStable,
        };
        let result = assess_risk(&answers);
        assert_eq!(result.score, 9);
        assert_eq!(result.style, RiskStyle::Growth);
    }

    #[test]
    fn test_band_edges() {
        let answers = RiskAnswers {
            reaction: DrawdownReaction::Hold,
            horizon: InvestmentHorizon::ThreeToSevenYears,
            stability: IncomeStability::NotStable,
        };
        assert_eq!(assess_risk(&answers).score, 3);
        assert_eq!(assess_risk(&answers).style, RiskStyle::Conservative);

        let answers = RiskAnswers {
            stability: IncomeStability::SomewhatStable,
            ..answers
        };
        assert_eq!(assess_risk(&answers).score, 4);
        assert_eq!(assess_risk(&answers).style, RiskStyle::Balanced);
    }
}
