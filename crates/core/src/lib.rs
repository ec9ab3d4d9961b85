#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod normalize;
pub mod session;
pub mod shuffle;
pub mod time;

pub use error::Error;
pub use normalize::{NormalizeError, normalize_batch, normalize_question};
pub use session::{QuizProgress, QuizSession, SessionError, SessionPhase};
pub use shuffle::{shuffle, shuffle_with};
pub use time::Clock;
