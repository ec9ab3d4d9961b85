use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::{AnswerRecord, Question, QuizSummary};
use quiz_core::{Clock, QuizSession, SessionPhase, normalize_batch};

use crate::error::{ProviderError, QuizError};
use crate::provider::{
    DEFAULT_BATCH_SIZE, DEFAULT_FETCH_TIMEOUT, ProviderConfig, QuestionProvider,
};
use crate::retry::{RetryConfig, retry_async};

/// Result of selecting an option for the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub record: AnswerRecord,
    pub is_correct: bool,
    pub score: usize,
}

/// What happened after moving past an answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Another question is waiting; `position` is 1-based.
    Next { position: usize },
    Completed(QuizSummary),
}

/// Loads question batches and drives sessions over them.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    provider: Arc<dyn QuestionProvider>,
    batch_size: usize,
    fetch_timeout: Duration,
    retry: RetryConfig,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, provider: Arc<dyn QuestionProvider>) -> Self {
        Self {
            clock,
            provider,
            batch_size: DEFAULT_BATCH_SIZE,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            retry: RetryConfig::default(),
        }
    }

    #[must_use]
    pub fn from_config(
        clock: Clock,
        provider: Arc<dyn QuestionProvider>,
        config: &ProviderConfig,
    ) -> Self {
        Self::new(clock, provider)
            .with_batch_size(config.batch_size)
            .with_fetch_timeout(config.fetch_timeout)
            .with_retry(RetryConfig::default().with_max_attempts(config.fetch_attempts))
    }

    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    #[must_use]
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Fetch and normalize one batch.
    ///
    /// Each attempt is bounded by the fetch timeout; retryable failures back off and retry.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Fetch` if every attempt fails or a failure is not retryable,
    /// and `QuizError::Malformed` if any record in the batch is unusable.
    pub async fn fetch_questions(&self) -> Result<Vec<Question>, QuizError> {
        let limit = self.batch_size;
        let timeout = self.fetch_timeout;
        let provider = Arc::clone(&self.provider);

        let raws = retry_async(
            &self.retry,
            |err: &ProviderError| {
                let retry = err.is_retryable();
                if retry {
                    tracing::warn!(error = %err, "question fetch failed, retrying");
                }
                retry
            },
            |attempt| {
                let provider = Arc::clone(&provider);
                async move {
                    tracing::debug!(attempt, limit, "fetching question batch");
                    match tokio::time::timeout(timeout, provider.fetch_batch(limit)).await {
                        Ok(result) => result,
                        Err(_) => Err(ProviderError::Timeout(timeout)),
                    }
                }
            },
        )
        .await
        .inspect_err(|err| tracing::error!(error = %err, "question fetch gave up"))?;

        if raws.len() != limit {
            tracing::warn!(
                expected = limit,
                received = raws.len(),
                "provider returned an unexpected batch size"
            );
        }

        Ok(normalize_batch(raws)?)
    }

    /// Fetch a batch and start a session over it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` for fetch, normalization, or empty-batch failures.
    /// No session exists on error.
    pub async fn start_quiz(&self) -> Result<QuizSession, QuizError> {
        let questions = self.fetch_questions().await?;
        let session = QuizSession::start_with_clock(questions, self.clock)?;
        tracing::info!(questions = session.total(), "quiz started");
        Ok(session)
    }

    /// Fetch a fresh batch and restart `session` over it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` on failure, leaving `session` unchanged.
    pub async fn restart(&self, session: &mut QuizSession) -> Result<(), QuizError> {
        let questions = self.fetch_questions().await?;
        session.restart(questions)?;
        tracing::info!(questions = session.total(), "quiz restarted");
        Ok(())
    }

    /// Record `selected` for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` for a repeated, unknown, or late selection.
    pub fn answer(
        &self,
        session: &mut QuizSession,
        selected: &str,
    ) -> Result<AnswerResult, QuizError> {
        let record = session.select_answer(selected)?.clone();
        let is_correct = record.is_correct();
        tracing::debug!(
            question = session.current_index() + 1,
            is_correct,
            "answer recorded"
        );

        Ok(AnswerResult {
            record,
            is_correct,
            score: session.score(),
        })
    }

    /// Move to the next question, or summarize once the last one is done.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the current question is unanswered
    /// or the session is already complete.
    pub fn advance(&self, session: &mut QuizSession) -> Result<AdvanceOutcome, QuizError> {
        match session.advance()? {
            SessionPhase::Complete => {
                let summary = QuizSummary::from_session(session)?;
                tracing::info!(
                    correct = summary.correct(),
                    incorrect = summary.incorrect(),
                    "quiz completed"
                );
                Ok(AdvanceOutcome::Completed(summary))
            }
            SessionPhase::AwaitingAnswer | SessionPhase::Answered => Ok(AdvanceOutcome::Next {
                position: session.progress().position,
            }),
        }
    }
}

impl std::fmt::Debug for QuizLoopService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizLoopService")
            .field("clock", &self.clock)
            .field("batch_size", &self.batch_size)
            .field("fetch_timeout", &self.fetch_timeout)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}
