#![forbid(unsafe_code)]

pub mod error;
pub mod provider;
pub mod quiz_service;
pub mod retry;

pub use quiz_core::Clock;

pub use error::{ProviderError, QuizError};
pub use provider::{InMemoryProvider, ProviderConfig, QuestionProvider, TriviaApiProvider};
pub use quiz_service::{AdvanceOutcome, AnswerResult, QuizLoopService};
pub use retry::RetryConfig;
