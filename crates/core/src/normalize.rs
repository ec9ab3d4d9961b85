//! Turns provider records into shuffled, validated questions.

use rand::Rng;
use thiserror::Error;

use crate::model::{Question, QuestionError, RawQuestion};
use crate::shuffle::shuffle_with;

/// A batch was rejected because one of its records is malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("question #{} is malformed: {source}", .index + 1)]
pub struct NormalizeError {
    /// Zero-based position of the offending record in the batch.
    pub index: usize,
    pub source: QuestionError,
}

/// Normalize one record, shuffling its options with the thread-local RNG.
///
/// # Errors
///
/// Returns `QuestionError` if the record cannot produce an answerable question.
pub fn normalize_question(raw: RawQuestion) -> Result<Question, QuestionError> {
    normalize_question_with(raw, &mut rand::rng())
}

/// Normalize one record using the given RNG for option order.
///
/// # Errors
///
/// Returns `QuestionError` if the record cannot produce an answerable question.
pub fn normalize_question_with<R>(raw: RawQuestion, rng: &mut R) -> Result<Question, QuestionError>
where
    R: Rng + ?Sized,
{
    let RawQuestion {
        category,
        question,
        correct_answer,
        incorrect_answers,
        ..
    } = raw;

    let correct_answer = correct_answer.trim().to_string();
    if incorrect_answers.is_empty() {
        return Err(QuestionError::NoIncorrectAnswers);
    }

    let mut options: Vec<String> = incorrect_answers
        .into_iter()
        .map(|answer| answer.trim().to_string())
        .collect();
    options.push(correct_answer.clone());

    Question::new(
        question.text.trim(),
        correct_answer,
        shuffle_with(options, rng),
        category.map(|c| c.trim().to_string()),
    )
}

/// Normalize every record in order. The first malformed record rejects the batch.
///
/// # Errors
///
/// Returns `NormalizeError` carrying the index of the first bad record.
pub fn normalize_batch(
    raws: impl IntoIterator<Item = RawQuestion>,
) -> Result<Vec<Question>, NormalizeError> {
    let mut rng = rand::rng();
    raws.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            normalize_question_with(raw, &mut rng).map_err(|source| NormalizeError { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn paris() -> RawQuestion {
        RawQuestion::new(
            "What is the capital of France?",
            "Paris",
            ["London", "Berlin", "Madrid"],
        )
    }

    #[test]
    fn options_are_a_permutation_of_all_answers() {
        let question = normalize_question(paris()).unwrap();

        assert_eq!(question.correct_answer(), "Paris");
        assert_eq!(question.options().len(), 4);
        let got: BTreeSet<&str> = question.options().iter().map(String::as_str).collect();
        let want: BTreeSet<&str> = ["Paris", "London", "Berlin", "Madrid"].into_iter().collect();
        assert_eq!(got, want);
    }

    #[test]
    fn seeded_rng_gives_stable_option_order() {
        let a = normalize_question_with(paris(), &mut StdRng::seed_from_u64(3)).unwrap();
        let b = normalize_question_with(paris(), &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.options(), b.options());
    }

    #[test]
    fn whitespace_is_trimmed() {
        let raw = RawQuestion::new("  Largest ocean?  ", " Pacific ", [" Atlantic", "Indian "])
            .with_category(" geography ");
        let question = normalize_question(raw).unwrap();
        assert_eq!(question.text(), "Largest ocean?");
        assert_eq!(question.correct_answer(), "Pacific");
        assert!(question.has_option("Atlantic"));
        assert!(question.has_option("Indian"));
        assert_eq!(question.category(), Some("geography"));
    }

    #[test]
    fn malformed_records_are_rejected() {
        let no_wrong = RawQuestion::new("Q?", "A", Vec::<String>::new());
        assert_eq!(
            normalize_question(no_wrong).unwrap_err(),
            QuestionError::NoIncorrectAnswers
        );

        let blank_correct = RawQuestion::new("Q?", "  ", ["B"]);
        assert_eq!(
            normalize_question(blank_correct).unwrap_err(),
            QuestionError::EmptyCorrectAnswer
        );

        let echo = RawQuestion::new("Q?", "A", ["A", "B"]);
        assert!(matches!(
            normalize_question(echo).unwrap_err(),
            QuestionError::DuplicateOption { .. }
        ));
    }

    #[test]
    fn batch_preserves_order() {
        let raws = vec![
            paris(),
            RawQuestion::new("2 + 2?", "4", ["3", "5"]),
            RawQuestion::new("Red planet?", "Mars", ["Venus"]),
        ];
        let questions = normalize_batch(raws).unwrap();
        let texts: Vec<&str> = questions.iter().map(Question::text).collect();
        assert_eq!(
            texts,
            vec!["What is the capital of France?", "2 + 2?", "Red planet?"]
        );
    }

    #[test]
    fn batch_reports_first_bad_index() {
        let raws = vec![
            paris(),
            RawQuestion::new("", "4", ["3"]),
            RawQuestion::new("Q?", "", ["3"]),
        ];
        let err = normalize_batch(raws).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.source, QuestionError::EmptyText);
        assert_eq!(
            err.to_string(),
            "question #2 is malformed: question text cannot be empty"
        );
    }
}
