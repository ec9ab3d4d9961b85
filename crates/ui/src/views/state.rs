use dioxus::prelude::*;
use quiz_core::SessionError;
use services::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Fetch,
    Malformed,
    EmptyBatch,
    InvalidAction,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_quiz(err: &QuizError) -> Self {
        tracing::warn!(error = %err, "quiz action failed");
        match err {
            QuizError::Fetch(_) => ViewError::Fetch,
            QuizError::Malformed(_) => ViewError::Malformed,
            QuizError::Session(SessionError::EmptyBatch) => ViewError::EmptyBatch,
            QuizError::Session(_) => ViewError::InvalidAction,
            _ => ViewError::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Fetch => "Could not load questions. Check your connection and try again.",
            ViewError::Malformed => "Received a question that cannot be answered. Please try again.",
            ViewError::EmptyBatch => "No questions were returned. Please try again.",
            ViewError::InvalidAction => "That action is not available right now.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }

    /// Whether a fresh fetch could help.
    #[must_use]
    pub fn can_retry(self) -> bool {
        !matches!(self, ViewError::InvalidAction)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use quiz_core::NormalizeError;
    use quiz_core::model::QuestionError;
    use services::ProviderError;

    #[test]
    fn quiz_errors_map_to_view_errors() {
        let fetch = QuizError::Fetch(ProviderError::Timeout(Duration::from_secs(10)));
        assert_eq!(ViewError::from_quiz(&fetch), ViewError::Fetch);

        let malformed = QuizError::Malformed(NormalizeError {
            index: 0,
            source: QuestionError::EmptyText,
        });
        assert_eq!(ViewError::from_quiz(&malformed), ViewError::Malformed);

        let empty = QuizError::Session(SessionError::EmptyBatch);
        assert_eq!(ViewError::from_quiz(&empty), ViewError::EmptyBatch);

        let usage = QuizError::Session(SessionError::NotAnswered { index: 2 });
        assert_eq!(ViewError::from_quiz(&usage), ViewError::InvalidAction);
        assert!(!ViewError::InvalidAction.can_retry());
        assert!(ViewError::Fetch.can_retry());
    }
}
