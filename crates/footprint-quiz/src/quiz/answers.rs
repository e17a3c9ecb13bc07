use super::catalog::QuestionCatalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chosen option weight per question id.
///
/// Answering a question again replaces the earlier weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    weights: BTreeMap<String, f64>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a weight, returning the one it replaced.
    pub fn record(&mut self, question_id: impl Into<String>, weight: f64) -> Option<f64> {
        self.weights.insert(question_id.into(), weight)
    }

    pub fn with(mut self, question_id: impl Into<String>, weight: f64) -> Self {
        self.record(question_id, weight);
        self
    }

    pub fn remove(&mut self, question_id: &str) -> Option<f64> {
        self.weights.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<f64> {
        self.weights.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights
            .iter()
            .map(|(question_id, weight)| (question_id.as_str(), *weight))
    }

    /// Catalog question ids with no recorded answer, in catalog order.
    pub fn missing<'a>(&self, catalog: &'a QuestionCatalog) -> Vec<&'a str> {
        catalog
            .questions()
            .iter()
            .filter(|question| !self.weights.contains_key(&question.id))
            .map(|question| question.id.as_str())
            .collect()
    }

    pub fn is_complete(&self, catalog: &QuestionCatalog) -> bool {
        self.missing(catalog).is_empty()
    }
}

impl FromIterator<(String, f64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_answering_overwrites_previous_weight() {
        let mut answers = AnswerSet::new();
        assert_eq!(answers.record("transport_mode", 1.2), None);
        assert_eq!(answers.record("transport_mode", 0.3), Some(1.2));

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("transport_mode"), Some(0.3));
    }

    #[test]
    fn reports_missing_questions_in_catalog_order() {
        let catalog = QuestionCatalog::standard();
        let answers = catalog.minimum_answers();
        assert!(answers.is_complete(&catalog));

        let mut partial = answers.clone();
        partial.remove("housing_type");
        partial.remove("food_origin");
        assert_eq!(partial.missing(&catalog), vec!["food_origin", "housing_type"]);
    }

    #[test]
    fn deserializes_from_plain_object() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"food_origin": 0.3, "goods_spending": 0.1}"#)
                .expect("answers parse");

        assert_eq!(answers.get("food_origin"), Some(0.3));
        assert_eq!(answers.get("goods_spending"), Some(0.1));
    }
}
