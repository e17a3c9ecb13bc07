use super::{AnswerOption, CatalogError, Question};
use crate::quiz::category::Category;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct CatalogRow {
    question_id: String,
    category: String,
    prompt: String,
    option_label: String,
    weight: f64,
}

/// Groups option rows by question id, keeping first-appearance order.
pub(super) fn parse_questions<R: Read>(reader: R) -> Result<Vec<Question>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut questions: Vec<Question> = Vec::new();

    for record in csv_reader.deserialize::<CatalogRow>() {
        let row = record?;
        let category: Category = row.category.parse()?;
        let option = AnswerOption::new(row.option_label, row.weight);

        match questions
            .iter_mut()
            .find(|question| question.id == row.question_id)
        {
            Some(existing) => {
                if existing.category != category {
                    return Err(CatalogError::ConflictingCategory {
                        question_id: row.question_id,
                        first: existing.category,
                        second: category,
                    });
                }
                existing.options.push(option);
            }
            None => questions.push(Question::new(
                row.question_id,
                category,
                row.prompt,
                vec![option],
            )),
        }
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::super::QuestionCatalog;
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "question_id,category,prompt,option_label,weight\n\
        diet,food,How often do you eat meat?,Daily,0.9\n\
        commute,Transporte,How do you commute?,Car,1.2\n\
        diet,food,How often do you eat meat?,Rarely,0.2\n\
        commute,Transporte,How do you commute?,Bike,0.0\n";

    #[test]
    fn groups_rows_by_question_in_file_order() {
        let catalog = QuestionCatalog::from_reader(Cursor::new(SAMPLE)).expect("catalog parses");

        assert_eq!(catalog.len(), 2);
        let diet = &catalog.questions()[0];
        assert_eq!(diet.id, "diet");
        assert_eq!(diet.category, Category::Food);
        assert_eq!(
            diet.options
                .iter()
                .map(|option| option.weight)
                .collect::<Vec<_>>(),
            vec![0.9, 0.2]
        );
        assert_eq!(catalog.questions()[1].category, Category::Transport);
    }

    #[test]
    fn rejects_unknown_categories() {
        let csv = "question_id,category,prompt,option_label,weight\nq,energy,p,o,0.1\n";

        match QuestionCatalog::from_reader(Cursor::new(csv)) {
            Err(CatalogError::Category(err)) => assert!(err.to_string().contains("energy")),
            other => panic!("expected unknown category error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_question_split_across_categories() {
        let csv = "question_id,category,prompt,option_label,weight\n\
            q,food,p,a,0.1\n\
            q,goods,p,b,0.2\n";

        assert!(matches!(
            QuestionCatalog::from_reader(Cursor::new(csv)),
            Err(CatalogError::ConflictingCategory { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_weights() {
        let csv = "question_id,category,prompt,option_label,weight\nq,food,p,a,lots\n";

        assert!(matches!(
            QuestionCatalog::from_reader(Cursor::new(csv)),
            Err(CatalogError::Csv(_))
        ));
    }
}
