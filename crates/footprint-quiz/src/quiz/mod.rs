//! Footprint questionnaire: catalog, answers, scoring and reporting.

pub mod advice;
pub mod answers;
pub mod catalog;
pub mod category;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

pub use advice::{AdviceError, AdviceRequest, StudentProfile};
pub use answers::AnswerSet;
pub use catalog::{AnswerOption, CatalogError, Question, QuestionCatalog};
pub use category::Category;
pub use report::FootprintReport;
pub use router::footprint_router;
pub use scoring::{
    compute, CalculationResult, CarbonFactors, FootprintScorer, InvalidAnswerReason, ScoringConfig,
    ScoringError, BIOCAPACITY_PER_PERSON,
};
pub use service::{FootprintService, FootprintServiceError, ScoreRequest, ScoreResponse};
pub use session::{QuizError, QuizSession};
