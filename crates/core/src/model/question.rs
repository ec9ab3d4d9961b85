use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Reasons a provider record cannot become an answerable question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("correct answer cannot be empty")]
    EmptyCorrectAnswer,

    #[error("question has no incorrect answers to choose from")]
    NoIncorrectAnswers,

    #[error("answer option cannot be empty")]
    EmptyOption,

    #[error("answer option {option:?} appears more than once")]
    DuplicateOption { option: String },

    #[error("options do not contain the correct answer")]
    MissingCorrectAnswer,
}

//
// ─── PROVIDER RECORD ───────────────────────────────────────────────────────────
//

/// Question text wrapper as sent by the trivia API (`{"text": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawQuestionText {
    pub text: String,
}

/// One question record exactly as the provider returns it.
///
/// Fields the quiz does not use are ignored during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub question: RawQuestionText,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

impl RawQuestion {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: None,
            category: None,
            question: RawQuestionText { text: text.into() },
            correct_answer: correct_answer.into(),
            incorrect_answers: incorrect_answers.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A question ready to be asked: text, the correct answer and the ordered options.
///
/// `options` always contains `correct_answer` exactly once and never repeats an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    correct_answer: String,
    options: Vec<String>,
    category: Option<String>,
}

impl Question {
    /// Build a question from already-ordered options.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text or any option is blank, an option repeats,
    /// the correct answer is missing from `options`, or it is the only option.
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        options: Vec<String>,
        category: Option<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        let correct_answer = correct_answer.into();

        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if correct_answer.trim().is_empty() {
            return Err(QuestionError::EmptyCorrectAnswer);
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption);
            }
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption {
                    option: option.clone(),
                });
            }
        }
        if !seen.contains(correct_answer.as_str()) {
            return Err(QuestionError::MissingCorrectAnswer);
        }
        if options.len() < 2 {
            return Err(QuestionError::NoIncorrectAnswers);
        }

        let category = category.filter(|c| !c.trim().is_empty());

        Ok(Self {
            text,
            correct_answer,
            options,
            category,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns true if `candidate` is one of this question's options.
    #[must_use]
    pub fn has_option(&self, candidate: &str) -> bool {
        self.options.iter().any(|option| option == candidate)
    }

    /// Exact string comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, candidate: &str) -> bool {
        self.correct_answer == candidate
    }
}
