use super::answers::AnswerSet;
use super::catalog::{Question, QuestionCatalog};
use super::scoring::{CalculationResult, FootprintScorer, ScoringError};

/// Walks a catalog one question at a time, collecting answers as it goes.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    catalog: &'a QuestionCatalog,
    answers: AnswerSet,
    cursor: usize,
}

impl<'a> QuizSession<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self {
            catalog,
            answers: AnswerSet::new(),
            cursor: 0,
        }
    }

    /// Question awaiting an answer, or `None` once the last one is answered.
    pub fn current(&self) -> Option<&'a Question> {
        self.catalog.questions().get(self.cursor)
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Answers the current question with the option at `option_index` and advances.
    pub fn answer(&mut self, option_index: usize) -> Result<(), QuizError> {
        let question = self.current().ok_or(QuizError::Finished)?;
        let option = question
            .options
            .get(option_index)
            .ok_or_else(|| QuizError::InvalidOption {
                question_id: question.id.clone(),
                option_index,
                available: question.options.len(),
            })?;

        self.answers.record(question.id.clone(), option.weight);
        self.cursor += 1;
        Ok(())
    }

    /// Steps back one question, keeping the answer already given.
    pub fn previous(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// True once every question has an answer, wherever the cursor sits.
    pub fn is_finished(&self) -> bool {
        self.answers.is_complete(self.catalog)
    }

    /// `(answered, total)` question counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), self.catalog.len())
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn finish(&self, scorer: &FootprintScorer) -> Result<CalculationResult, QuizError> {
        if !self.is_finished() {
            let (answered, total) = self.progress();
            return Err(QuizError::Unfinished { answered, total });
        }

        Ok(scorer.compute(&self.answers, self.catalog)?)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuizError {
    #[error("every question has already been answered")]
    Finished,
    #[error("question '{question_id}' has {available} options, {option_index} is out of range")]
    InvalidOption {
        question_id: String,
        option_index: usize,
        available: usize,
    },
    #[error("quiz is not finished ({answered} of {total} answered)")]
    Unfinished { answered: usize, total: usize },
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_every_question_then_scores() {
        let catalog = QuestionCatalog::standard();
        let mut session = QuizSession::new(&catalog);

        while let Some(question) = session.current() {
            let last = question.options.len() - 1;
            session.answer(last).expect("option exists");
        }

        assert!(session.is_finished());
        assert_eq!(session.progress(), (17, 17));
        let result = session
            .finish(&FootprintScorer::for_year(2025))
            .expect("finished quiz scores");
        assert_eq!(result.total_gha, 0.9);
        assert_eq!(result.overshoot_date, "31 Dec");
    }

    #[test]
    fn going_back_overwrites_the_earlier_answer() {
        let catalog = QuestionCatalog::standard();
        let mut session = QuizSession::new(&catalog);

        session.answer(0).expect("first option");
        assert_eq!(session.answers().get("food_diet_frequency"), Some(0.9));

        assert!(session.previous());
        assert!(!session.previous());
        session.answer(4).expect("vegan option");

        assert_eq!(session.answers().get("food_diet_frequency"), Some(0.05));
        assert_eq!(session.position(), 1);
        assert_eq!(session.progress(), (1, 17));
    }

    #[test]
    fn stepping_back_after_the_last_answer_can_still_finish() {
        let catalog = QuestionCatalog::standard();
        let mut session = QuizSession::new(&catalog);

        while session.current().is_some() {
            session.answer(0).expect("first option");
        }
        assert!(session.previous());
        assert_eq!(session.position(), 16);
        assert!(session.current().is_some());

        assert!(session.is_finished());
        let result = session
            .finish(&FootprintScorer::for_year(2025))
            .expect("every question answered");
        let expected = FootprintScorer::for_year(2025)
            .compute(session.answers(), &catalog)
            .expect("answers score");
        assert_eq!(result, expected);
    }

    #[test]
    fn rejects_out_of_range_option() {
        let catalog = QuestionCatalog::standard();
        let mut session = QuizSession::new(&catalog);

        match session.answer(9) {
            Err(QuizError::InvalidOption {
                question_id,
                available,
                ..
            }) => {
                assert_eq!(question_id, "food_diet_frequency");
                assert_eq!(available, 5);
            }
            other => panic!("expected invalid option, got {other:?}"),
        }
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn finishing_early_is_refused() {
        let catalog = QuestionCatalog::standard();
        let mut session = QuizSession::new(&catalog);
        session.answer(1).expect("option exists");

        assert_eq!(
            session.finish(&FootprintScorer::for_year(2025)),
            Err(QuizError::Unfinished {
                answered: 1,
                total: 17
            })
        );
    }
}
