//! The quiz session state machine.
//!
//! A session is created from a validated, non-empty batch and moves through
//! `AwaitingAnswer -> Answered -> AwaitingAnswer ... -> Complete` via
//! [`QuizSession::select_answer`] and [`QuizSession::advance`]. Every
//! transition checks its preconditions before touching any field.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AnswerRecord, Question};
use crate::time::Clock;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// A session operation was called in a state where it is not allowed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot start a session without questions")]
    EmptyBatch,

    #[error("question {} was already answered", .index + 1)]
    AlreadyAnswered { index: usize },

    #[error("question {} has not been answered yet", .index + 1)]
    NotAnswered { index: usize },

    #[error("{selected:?} is not an option for question {}", .index + 1)]
    UnknownOption { index: usize, selected: String },

    #[error("session already completed")]
    Completed,

    #[error("session is not complete yet")]
    NotComplete,
}

//
// ─── PHASE / PROGRESS ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The current question is waiting for a selection.
    AwaitingAnswer,
    /// The current question has a recorded answer; `advance` moves on.
    Answered,
    /// Every question has been answered and advanced past.
    Complete,
}

impl SessionPhase {
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        !matches!(self, SessionPhase::Complete)
    }
}

/// Read-only snapshot of where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the current question; equals `total` once complete.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub score: usize,
    pub phase: SessionPhase,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a fixed batch of questions.
#[derive(Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    score: usize,
    answers: Vec<AnswerRecord>,
    clock: Clock,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a session over `questions`, timestamped with the system clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBatch` if `questions` is empty.
    pub fn start(questions: Vec<Question>) -> Result<Self, SessionError> {
        Self::start_with_clock(questions, Clock::system())
    }

    /// # Errors
    ///
    /// Returns `SessionError::EmptyBatch` if `questions` is empty.
    pub fn start_with_clock(questions: Vec<Question>, clock: Clock) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyBatch);
        }

        let answers = Vec::with_capacity(questions.len());
        Ok(Self {
            questions,
            current: 0,
            score: 0,
            answers,
            clock,
            started_at: clock.now(),
            completed_at: None,
        })
    }

    /// Replace this session with a fresh run over a new batch.
    ///
    /// On error the existing session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBatch` if `questions` is empty.
    pub fn restart(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        *self = Self::start_with_clock(questions, self.clock)?;
        Ok(())
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.current >= self.questions.len() {
            SessionPhase::Complete
        } else if self.answers.len() > self.current {
            SessionPhase::Answered
        } else {
            SessionPhase::AwaitingAnswer
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase() == SessionPhase::Complete
    }

    /// Zero-based index of the active question, or `total()` once complete.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// The answer recorded for the current question, if it has one.
    #[must_use]
    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        if self.phase() == SessionPhase::Answered {
            self.answers.get(self.current)
        } else {
            None
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.total();
        QuizProgress {
            position: (self.current + 1).min(total),
            total,
            answered: self.answers.len(),
            score: self.score,
            phase: self.phase(),
        }
    }

    /// Record `selected` as the answer to the current question.
    ///
    /// Scores a point on an exact match with the correct answer. Does not advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is over,
    /// `SessionError::AlreadyAnswered` on a second selection for the same question,
    /// and `SessionError::UnknownOption` if `selected` is not one of its options.
    pub fn select_answer(&mut self, selected: &str) -> Result<&AnswerRecord, SessionError> {
        let index = self.current;
        let question = match self.phase() {
            SessionPhase::Complete => return Err(SessionError::Completed),
            SessionPhase::Answered => return Err(SessionError::AlreadyAnswered { index }),
            SessionPhase::AwaitingAnswer => &self.questions[index],
        };

        if !question.has_option(selected) {
            return Err(SessionError::UnknownOption {
                index,
                selected: selected.to_string(),
            });
        }

        let record = AnswerRecord::new(question.text(), selected, question.correct_answer());
        if record.is_correct() {
            self.score += 1;
        }
        // `answers` holds one record per earlier question, so this lands at `index`.
        self.answers.push(record);
        Ok(&self.answers[index])
    }

    /// Move past the answered current question.
    ///
    /// Returns the new phase; `SessionPhase::Complete` after the last question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` if the current question has no answer yet
    /// and `SessionError::Completed` once the session is over.
    pub fn advance(&mut self) -> Result<SessionPhase, SessionError> {
        match self.phase() {
            SessionPhase::Complete => return Err(SessionError::Completed),
            SessionPhase::AwaitingAnswer => {
                return Err(SessionError::NotAnswered {
                    index: self.current,
                });
            }
            SessionPhase::Answered => {}
        }

        self.current += 1;
        if self.current == self.questions.len() {
            self.completed_at = Some(self.clock.now());
        }

        Ok(self.phase())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
