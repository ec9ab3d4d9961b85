use thiserror::Error;

use crate::model::QuestionError;
use crate::normalize::NormalizeError;
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
