mod config;
mod rules;

pub use config::{CarbonFactors, ScoringConfig, BIOCAPACITY_PER_PERSON};

pub(crate) use rules::round_to;

use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::category::Category;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stateless scorer turning an answer set into footprint metrics.
///
/// The scoring year is fixed at construction so repeated calls produce identical
/// overshoot dates.
#[derive(Debug, Clone)]
pub struct FootprintScorer {
    config: ScoringConfig,
    year: i32,
}

impl FootprintScorer {
    pub fn new(config: ScoringConfig, year: i32) -> Self {
        Self { config, year }
    }

    pub fn for_year(year: i32) -> Self {
        Self::new(ScoringConfig::default(), year)
    }

    /// Default parameters, dated in the current local year.
    pub fn current() -> Self {
        Self::for_year(Local::now().year())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn compute(
        &self,
        answers: &AnswerSet,
        catalog: &QuestionCatalog,
    ) -> Result<CalculationResult, ScoringError> {
        if catalog.is_empty() {
            return Err(ScoringError::EmptyCatalog);
        }

        let answers = rules::resolve_answers(answers, catalog)?;

        if self.config.require_complete {
            let missing = answers.missing(catalog);
            if !missing.is_empty() {
                return Err(ScoringError::IncompleteAnswers {
                    missing: missing.into_iter().map(str::to_string).collect(),
                });
            }
        }

        let breakdown = rules::category_subtotals(&answers, catalog);
        let total_gha = round_to(breakdown.values().sum(), 2);
        let number_earths = rules::number_earths(total_gha, &self.config);
        let carbon_footprint = rules::carbon_footprint(&breakdown, &self.config.carbon);
        let overshoot_day =
            rules::overshoot_day(self.year, total_gha, self.config.biocapacity_per_person)?;

        Ok(CalculationResult {
            total_gha,
            number_earths,
            overshoot_date: rules::format_overshoot(overshoot_day),
            overshoot_day,
            carbon_footprint,
            breakdown,
        })
    }
}

/// Scores `answers` against `catalog` with default parameters in the current year.
pub fn compute(
    answers: &AnswerSet,
    catalog: &QuestionCatalog,
) -> Result<CalculationResult, ScoringError> {
    FootprintScorer::current().compute(answers, catalog)
}

/// Footprint metrics for one completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Global hectares, the sum of `breakdown`.
    pub total_gha: f64,
    /// Planets needed if everyone lived at this footprint.
    pub number_earths: f64,
    /// Overshoot day formatted as `DD Mon`.
    pub overshoot_date: String,
    pub overshoot_day: NaiveDate,
    /// Tonnes of CO2 per year.
    pub carbon_footprint: f64,
    pub breakdown: BTreeMap<Category, f64>,
}

impl CalculationResult {
    pub fn subtotal(&self, category: Category) -> f64 {
        self.breakdown.get(&category).copied().unwrap_or(0.0)
    }

    /// Category with the largest subtotal; ties go to the earlier category.
    pub fn dominant_category(&self) -> Option<Category> {
        Category::ordered()
            .into_iter()
            .filter(|category| self.subtotal(*category) > 0.0)
            .fold(None, |best: Option<Category>, category| match best {
                Some(current) if self.subtotal(current) >= self.subtotal(category) => {
                    Some(current)
                }
                _ => Some(category),
            })
    }

    pub fn exceeds_biocapacity(&self, biocapacity_per_person: f64) -> bool {
        self.total_gha > biocapacity_per_person
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidAnswerReason {
    UnknownQuestion,
    UndeclaredWeight,
}

impl fmt::Display for InvalidAnswerReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidAnswerReason::UnknownQuestion => write!(f, "question is not in the catalog"),
            InvalidAnswerReason::UndeclaredWeight => {
                write!(f, "weight is not one of the question's options")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("invalid answer for '{question_id}' with weight {weight}: {reason}")]
    InvalidAnswer {
        question_id: String,
        weight: f64,
        reason: InvalidAnswerReason,
    },
    #[error("question catalog is empty")]
    EmptyCatalog,
    #[error("{} question(s) left unanswered: {}", .missing.len(), .missing.join(", "))]
    IncompleteAnswers { missing: Vec<String> },
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::{AnswerOption, Question};

    fn two_question_catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            Question::new(
                "q1",
                Category::Food,
                "diet",
                vec![AnswerOption::new("meat", 0.9), AnswerOption::new("plants", 0.2)],
            ),
            Question::new(
                "q2",
                Category::Transport,
                "commute",
                vec![AnswerOption::new("car", 1.2), AnswerOption::new("walk", 0.0)],
            ),
        ])
        .expect("valid catalog")
    }

    #[test]
    fn scores_two_question_scenario() {
        let scorer = FootprintScorer::for_year(2025);
        let answers = AnswerSet::new().with("q1", 0.9).with("q2", 1.2);

        let result = scorer
            .compute(&answers, &two_question_catalog())
            .expect("scoring succeeds");

        assert_eq!(result.total_gha, 2.1);
        assert_eq!(result.number_earths, 1.3);
        assert_eq!(result.subtotal(Category::Food), 0.9);
        assert_eq!(result.subtotal(Category::Transport), 1.2);
        assert_eq!(result.subtotal(Category::Housing), 0.0);
        assert_eq!(result.subtotal(Category::Goods), 0.0);
        assert_eq!(result.subtotal(Category::Services), 0.0);
        assert_eq!(result.breakdown.len(), 5);
        assert_eq!(result.overshoot_date, "05 Oct");
        // (1.2 + 0.45) * 2.5
        assert_eq!(result.carbon_footprint, 4.13);
        assert_eq!(result.dominant_category(), Some(Category::Transport));
    }

    #[test]
    fn rejects_unknown_question() {
        let scorer = FootprintScorer::for_year(2025);
        let answers = AnswerSet::new().with("q9", 0.9);

        match scorer.compute(&answers, &two_question_catalog()) {
            Err(ScoringError::InvalidAnswer {
                question_id,
                reason,
                ..
            }) => {
                assert_eq!(question_id, "q9");
                assert_eq!(reason, InvalidAnswerReason::UnknownQuestion);
            }
            other => panic!("expected invalid answer, got {other:?}"),
        }
    }

    #[test]
    fn rejects_weight_outside_declared_options() {
        let scorer = FootprintScorer::for_year(2025);
        let answers = AnswerSet::new().with("q1", 0.5);

        match scorer.compute(&answers, &two_question_catalog()) {
            Err(ScoringError::InvalidAnswer { reason, weight, .. }) => {
                assert_eq!(reason, InvalidAnswerReason::UndeclaredWeight);
                assert_eq!(weight, 0.5);
            }
            other => panic!("expected invalid answer, got {other:?}"),
        }
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let catalog = QuestionCatalog::new(Vec::new()).expect("empty catalog builds");

        assert_eq!(
            FootprintScorer::for_year(2025).compute(&AnswerSet::new(), &catalog),
            Err(ScoringError::EmptyCatalog)
        );
    }

    #[test]
    fn partial_answers_count_as_zero_by_default() {
        let scorer = FootprintScorer::for_year(2025);
        let answers = AnswerSet::new().with("q2", 1.2);

        let result = scorer
            .compute(&answers, &two_question_catalog())
            .expect("partial answers tolerated");

        assert_eq!(result.total_gha, 1.2);
        assert_eq!(result.subtotal(Category::Food), 0.0);
    }

    #[test]
    fn strict_scoring_lists_missing_questions() {
        let config = ScoringConfig {
            require_complete: true,
            ..ScoringConfig::default()
        };
        let scorer = FootprintScorer::new(config, 2025);
        let answers = AnswerSet::new().with("q2", 0.0);

        match scorer.compute(&answers, &two_question_catalog()) {
            Err(ScoringError::IncompleteAnswers { missing }) => {
                assert_eq!(missing, vec!["q1".to_string()]);
            }
            other => panic!("expected incomplete answers, got {other:?}"),
        }
    }

    #[test]
    fn no_answers_yield_zero_footprint_ending_on_last_day() {
        let result = FootprintScorer::for_year(2024)
            .compute(&AnswerSet::new(), &two_question_catalog())
            .expect("scoring succeeds");

        assert_eq!(result.total_gha, 0.0);
        assert_eq!(result.number_earths, 0.0);
        assert_eq!(result.overshoot_date, "31 Dec");
        assert_eq!(result.dominant_category(), None);
    }

    #[test]
    fn result_serializes_to_plain_object() {
        let result = FootprintScorer::for_year(2025)
            .compute(
                &AnswerSet::new().with("q1", 0.2).with("q2", 0.0),
                &two_question_catalog(),
            )
            .expect("scoring succeeds");

        let value = serde_json::to_value(&result).expect("serializes");
        assert_eq!(value["total_gha"], 0.2);
        assert_eq!(value["overshoot_date"], "31 Dec");
        assert_eq!(value["overshoot_day"], "2025-12-31");
        assert_eq!(value["breakdown"]["food"], 0.2);
        assert_eq!(value["breakdown"]["services"], 0.0);
    }
}
