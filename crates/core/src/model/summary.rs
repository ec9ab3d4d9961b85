use chrono::{DateTime, Utc};

use crate::model::AnswerRecord;
use crate::session::{QuizSession, SessionError};

/// Final tally of a completed session plus the answers that were wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    correct: usize,
    incorrect: usize,
    corrections: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Summarize a session that has reached `Complete`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain.
    pub fn from_session(session: &QuizSession) -> Result<Self, SessionError> {
        let Some(completed_at) = session.completed_at() else {
            return Err(SessionError::NotComplete);
        };

        let correct = session.score();
        let corrections: Vec<AnswerRecord> = session
            .answers()
            .iter()
            .filter(|answer| !answer.is_correct())
            .cloned()
            .collect();

        Ok(Self {
            correct,
            incorrect: session.total().saturating_sub(correct),
            corrections,
            started_at: session.started_at(),
            completed_at,
        })
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }

    /// Wrong answers in the order the questions were asked.
    #[must_use]
    pub fn corrections(&self) -> &[AnswerRecord] {
        &self.corrections
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.incorrect == 0
    }

    #[must_use]
    pub fn score_line(&self) -> String {
        format!(
            "You answered {} correctly and {} incorrectly.",
            self.correct, self.incorrect
        )
    }
}
