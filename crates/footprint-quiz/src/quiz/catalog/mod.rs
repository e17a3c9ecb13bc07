mod import;
mod standard;

use super::answers::AnswerSet;
use super::category::{Category, UnknownCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Weights closer than this are treated as the same option.
pub(crate) const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Selectable choice for a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub weight: f64,
}

impl AnswerOption {
    pub fn new(label: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub category: Category,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        category: Category,
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            prompt: prompt.into(),
            options,
        }
    }

    pub fn declares_weight(&self, weight: f64) -> bool {
        self.declared_weight(weight).is_some()
    }

    /// The option weight matching `weight` within tolerance, as declared in the catalog.
    pub fn declared_weight(&self, weight: f64) -> Option<f64> {
        self.options
            .iter()
            .map(|option| option.weight)
            .find(|declared| (declared - weight).abs() < WEIGHT_TOLERANCE)
    }

    pub fn min_weight(&self) -> f64 {
        self.options
            .iter()
            .map(|option| option.weight)
            .fold(f64::INFINITY, f64::min)
    }

    pub fn max_weight(&self) -> f64 {
        self.options
            .iter()
            .map(|option| option.weight)
            .fold(0.0, f64::max)
    }
}

/// Immutable, ordered question table the scorer reads category membership from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Builds a catalog after checking ids and option weights.
    ///
    /// An empty list is accepted; scoring against it fails instead.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if question.id.trim().is_empty() {
                return Err(CatalogError::BlankQuestionId);
            }
            if !seen.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions(question.id.clone()));
            }
            for (index, option) in question.options.iter().enumerate() {
                if !option.weight.is_finite() || option.weight < 0.0 {
                    return Err(CatalogError::InvalidWeight {
                        question_id: question.id.clone(),
                        weight: option.weight,
                    });
                }
                let repeated = question.options[..index]
                    .iter()
                    .any(|earlier| (earlier.weight - option.weight).abs() < WEIGHT_TOLERANCE);
                if repeated {
                    return Err(CatalogError::DuplicateWeight {
                        question_id: question.id.clone(),
                        weight: option.weight,
                    });
                }
            }
        }

        Ok(Self { questions })
    }

    /// The built-in seventeen question course catalog.
    pub fn standard() -> Self {
        Self {
            questions: standard::standard_questions(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads `question_id,category,prompt,option_label,weight` rows, one per option.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let questions = import::parse_questions(reader)?;
        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn position(&self, question_id: &str) -> Option<usize> {
        self.questions
            .iter()
            .position(|question| question.id == question_id)
    }

    pub fn questions_for_category(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }

    /// Answers every question with its lowest-impact option.
    pub fn minimum_answers(&self) -> AnswerSet {
        self.questions
            .iter()
            .map(|question| (question.id.clone(), question.min_weight()))
            .collect()
    }

    /// Answers every question with its highest-impact option.
    pub fn maximum_answers(&self) -> AnswerSet {
        self.questions
            .iter()
            .map(|question| (question.id.clone(), question.max_weight()))
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read question catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Category(#[from] UnknownCategory),
    #[error("question ids must not be blank")]
    BlankQuestionId,
    #[error("question '{0}' is declared more than once")]
    DuplicateQuestion(String),
    #[error("question '{0}' has no options")]
    NoOptions(String),
    #[error("question '{question_id}' declares invalid weight {weight}")]
    InvalidWeight { question_id: String, weight: f64 },
    #[error("question '{question_id}' declares weight {weight} twice")]
    DuplicateWeight { question_id: String, weight: f64 },
    #[error("question '{question_id}' is listed under both {first} and {second}")]
    ConflictingCategory {
        question_id: String,
        first: Category,
        second: Category,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(weight: f64) -> AnswerOption {
        AnswerOption::new(format!("w{weight}"), weight)
    }

    #[test]
    fn standard_catalog_covers_every_category() {
        let catalog = QuestionCatalog::standard();

        assert_eq!(catalog.len(), 17);
        assert_eq!(catalog.questions_for_category(Category::Food).len(), 4);
        assert_eq!(catalog.questions_for_category(Category::Housing).len(), 4);
        assert_eq!(catalog.questions_for_category(Category::Transport).len(), 4);
        assert_eq!(catalog.questions_for_category(Category::Goods).len(), 3);
        assert_eq!(catalog.questions_for_category(Category::Services).len(), 2);
        assert!(QuestionCatalog::new(catalog.questions().to_vec()).is_ok());
    }

    #[test]
    fn rejects_duplicate_question_ids() {
        let questions = vec![
            Question::new("q1", Category::Food, "first", vec![option(0.1)]),
            Question::new("q1", Category::Goods, "second", vec![option(0.2)]),
        ];

        match QuestionCatalog::new(questions) {
            Err(CatalogError::DuplicateQuestion(id)) => assert_eq!(id, "q1"),
            other => panic!("expected duplicate question error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_and_repeated_weights() {
        let negative = vec![Question::new("q1", Category::Food, "p", vec![option(-0.1)])];
        assert!(matches!(
            QuestionCatalog::new(negative),
            Err(CatalogError::InvalidWeight { .. })
        ));

        let repeated = vec![Question::new(
            "q1",
            Category::Food,
            "p",
            vec![option(0.3), option(0.3)],
        )];
        assert!(matches!(
            QuestionCatalog::new(repeated),
            Err(CatalogError::DuplicateWeight { .. })
        ));
    }

    #[test]
    fn minimum_answers_pick_lowest_option() {
        let catalog = QuestionCatalog::standard();
        let answers = catalog.minimum_answers();

        assert_eq!(answers.len(), catalog.len());
        assert_eq!(answers.get("food_diet_frequency"), Some(0.05));
        assert_eq!(answers.get("transport_flights"), Some(0.0));
        assert_eq!(
            catalog.maximum_answers().get("transport_flights"),
            Some(1.5)
        );
    }
}
