mod answer;
mod question;
mod summary;

pub use answer::AnswerRecord;
pub use question::{Question, QuestionError, RawQuestion, RawQuestionText};
pub use summary::QuizSummary;
