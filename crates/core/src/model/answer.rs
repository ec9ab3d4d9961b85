use std::fmt;

/// What the user picked for one question, captured at selection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    question: String,
    selected_answer: String,
    correct_answer: String,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        selected_answer: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            selected_answer: selected_answer.into(),
            correct_answer: correct_answer.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn selected_answer(&self) -> &str {
        &self.selected_answer
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.selected_answer == self.correct_answer
    }
}

impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Question: {} | Your Answer: {} | Correct Answer: {}",
            self.question, self.selected_answer, self.correct_answer
        )
    }
}
