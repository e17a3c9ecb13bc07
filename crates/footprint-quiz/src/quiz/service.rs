use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::advice::{AdviceError, AdviceRequest, StudentProfile};
use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::report::{FootprintReport, REFLECTIVE_QUESTIONS};
use super::scoring::{CalculationResult, FootprintScorer, ScoringConfig, ScoringError};

/// Request body for scoring a completed questionnaire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub answers: AnswerSet,
    /// Year the overshoot date falls in; defaults to the current year.
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub profile: Option<StudentProfile>,
    /// Free-text answers keyed by reflective question index, starting at 0.
    #[serde(default)]
    pub reflective_answers: BTreeMap<usize, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub result: CalculationResult,
    pub report: FootprintReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice_request: Option<AdviceRequest>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub reflective_answers: BTreeMap<usize, String>,
}

/// Shared scoring entry point for the HTTP router and the command line.
pub struct FootprintService {
    catalog: Arc<QuestionCatalog>,
    config: ScoringConfig,
}

impl FootprintService {
    pub fn new(catalog: Arc<QuestionCatalog>, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn scorer(&self, year: Option<i32>) -> FootprintScorer {
        let year = year.unwrap_or_else(|| Local::now().year());
        FootprintScorer::new(self.config.clone(), year)
    }

    pub fn score(&self, request: ScoreRequest) -> Result<ScoreResponse, FootprintServiceError> {
        let ScoreRequest {
            answers,
            year,
            profile,
            reflective_answers,
        } = request;

        let reflective_answers = clean_reflective_answers(reflective_answers)?;
        let scorer = self.scorer(year);
        debug!(answered = answers.len(), year = scorer.year(), "scoring questionnaire");
        let result = scorer.compute(&answers, &self.catalog)?;
        let report = FootprintReport::new(&result, self.config.biocapacity_per_person);
        let advice_request = profile
            .map(|profile| AdviceRequest::new(profile, result.clone()))
            .transpose()?;

        info!(
            total_gha = result.total_gha,
            number_earths = result.number_earths,
            overshoot = %result.overshoot_date,
            "footprint scored"
        );

        Ok(ScoreResponse {
            result,
            report,
            advice_request,
            reflective_answers,
        })
    }
}

/// Drops blank answers and rejects indexes past the reflective question list.
fn clean_reflective_answers(
    answers: BTreeMap<usize, String>,
) -> Result<BTreeMap<usize, String>, FootprintServiceError> {
    let mut cleaned = BTreeMap::new();
    for (index, answer) in answers {
        if index >= REFLECTIVE_QUESTIONS.len() {
            return Err(FootprintServiceError::UnknownReflectiveQuestion {
                index,
                available: REFLECTIVE_QUESTIONS.len(),
            });
        }
        let answer = answer.trim();
        if !answer.is_empty() {
            cleaned.insert(index, answer.to_string());
        }
    }
    Ok(cleaned)
}

#[derive(Debug, thiserror::Error)]
pub enum FootprintServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Advice(#[from] AdviceError),
    #[error("reflective question {index} does not exist ({available} questions)")]
    UnknownReflectiveQuestion { index: usize, available: usize },
}
