use super::config::{CarbonFactors, ScoringConfig};
use super::{InvalidAnswerReason, ScoringError};
use crate::quiz::answers::AnswerSet;
use crate::quiz::catalog::QuestionCatalog;
use crate::quiz::category::Category;
use chrono::NaiveDate;
use std::collections::BTreeMap;

const DAYS_IN_YEAR: f64 = 365.0;

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Every answer must name a catalog question and one of its declared weights.
///
/// Returns the answers snapped to the catalog's own option weights.
pub(crate) fn resolve_answers(
    answers: &AnswerSet,
    catalog: &QuestionCatalog,
) -> Result<AnswerSet, ScoringError> {
    let mut resolved = AnswerSet::new();

    for (question_id, weight) in answers.iter() {
        let declared = match catalog.get(question_id) {
            None => Err(InvalidAnswerReason::UnknownQuestion),
            Some(question) => question
                .declared_weight(weight)
                .ok_or(InvalidAnswerReason::UndeclaredWeight),
        };

        match declared {
            Ok(declared) => {
                resolved.record(question_id, declared);
            }
            Err(reason) => {
                return Err(ScoringError::InvalidAnswer {
                    question_id: question_id.to_string(),
                    weight,
                    reason,
                })
            }
        }
    }

    Ok(resolved)
}

/// Per-category subtotals, rounded to two decimals; unanswered questions add nothing.
pub(crate) fn category_subtotals(
    answers: &AnswerSet,
    catalog: &QuestionCatalog,
) -> BTreeMap<Category, f64> {
    let mut raw: BTreeMap<Category, f64> = Category::ordered()
        .into_iter()
        .map(|category| (category, 0.0))
        .collect();

    for question in catalog.questions() {
        let weight = answers.get(&question.id).unwrap_or(0.0);
        *raw.entry(question.category).or_insert(0.0) += weight;
    }

    raw.into_iter()
        .map(|(category, subtotal)| (category, round_to(subtotal, 2)))
        .collect()
}

pub(crate) fn carbon_footprint(
    breakdown: &BTreeMap<Category, f64>,
    factors: &CarbonFactors,
) -> f64 {
    let subtotal = |category: Category| breakdown.get(&category).copied().unwrap_or(0.0);
    let carbon_gha = subtotal(Category::Transport)
        + factors.food_share * subtotal(Category::Food)
        + factors.housing_share * subtotal(Category::Housing);

    round_to(carbon_gha * factors.tonnes_co2_per_gha, 2)
}

pub(crate) fn number_earths(total_gha: f64, config: &ScoringConfig) -> f64 {
    round_to(total_gha / config.biocapacity_per_person, 1)
}

/// Day of `year` on which a yearly biocapacity budget runs out at the given rate.
///
/// Budgets that last the whole year, including a zero footprint, end on December 31.
pub(crate) fn overshoot_day(
    year: i32,
    total_gha: f64,
    biocapacity_per_person: f64,
) -> Result<NaiveDate, ScoringError> {
    let last_day =
        NaiveDate::from_ymd_opt(year, 12, 31).ok_or(ScoringError::YearOutOfRange(year))?;
    if total_gha <= 0.0 {
        return Ok(last_day);
    }

    let days = (DAYS_IN_YEAR * biocapacity_per_person / total_gha)
        .round()
        .clamp(1.0, DAYS_IN_YEAR) as u32;
    if days >= DAYS_IN_YEAR as u32 {
        return Ok(last_day);
    }

    NaiveDate::from_yo_opt(year, days).ok_or(ScoringError::YearOutOfRange(year))
}

pub(crate) fn format_overshoot(date: NaiveDate) -> String {
    date.format("%d %b").to_string()
}
