use quiz_core::{QuizSession, SessionPhase};
use services::{AdvanceOutcome, QuizLoopService};

use crate::views::ViewError;
use crate::vm::SummaryVm;

/// Commands the quiz page sends back into the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Next,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    /// Selectable, nothing chosen yet.
    Open,
    Correct,
    Wrong,
    /// Locked after a selection, neither picked nor correct.
    Locked,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Open | OptionState::Locked => "quiz-option",
            OptionState::Correct => "quiz-option quiz-option--correct",
            OptionState::Wrong => "quiz-option quiz-option--wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub state: OptionState,
}

impl OptionVm {
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.state != OptionState::Open
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    /// `"{n}. {text}"`, numbered from one.
    pub heading: String,
    pub category: Option<String>,
    pub progress_label: String,
    pub options: Vec<OptionVm>,
    pub show_next: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed(SummaryVm),
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Display data for the active question, or `None` once the quiz is over.
    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        let question = self.session.current_question()?;
        let picked = self.session.current_answer().map(|a| a.selected_answer());
        let progress = self.session.progress();

        let options = question
            .options()
            .iter()
            .map(|label| {
                let state = match picked {
                    None => OptionState::Open,
                    Some(_) if question.is_correct(label) => OptionState::Correct,
                    Some(chosen) if chosen == label.as_str() => OptionState::Wrong,
                    Some(_) => OptionState::Locked,
                };
                OptionVm {
                    label: label.clone(),
                    state,
                }
            })
            .collect();

        Some(QuestionVm {
            heading: format!("{}. {}", progress.position, question.text()),
            category: question.category().map(|c| c.replace('_', " ")),
            progress_label: format!("Question {} of {}", progress.position, progress.total),
            options,
            show_next: progress.phase == SessionPhase::Answered,
        })
    }

    #[must_use]
    pub fn summary(&self) -> Option<SummaryVm> {
        quiz_core::model::QuizSummary::from_session(&self.session)
            .ok()
            .map(|summary| SummaryVm::from(&summary))
    }

    /// # Errors
    ///
    /// Returns `ViewError::InvalidAction` if the session rejects the selection.
    pub fn select(&mut self, quiz_loop: &QuizLoopService, label: &str) -> Result<(), ViewError> {
        quiz_loop
            .answer(&mut self.session, label)
            .map(|_| ())
            .map_err(|err| ViewError::from_quiz(&err))
    }

    /// # Errors
    ///
    /// Returns `ViewError::InvalidAction` if the current question is unanswered.
    pub fn next(&mut self, quiz_loop: &QuizLoopService) -> Result<QuizOutcome, ViewError> {
        match quiz_loop.advance(&mut self.session) {
            Ok(AdvanceOutcome::Next { .. }) => Ok(QuizOutcome::Continue),
            Ok(AdvanceOutcome::Completed(summary)) => {
                Ok(QuizOutcome::Completed(SummaryVm::from(&summary)))
            }
            Err(err) => Err(ViewError::from_quiz(&err)),
        }
    }
}

/// # Errors
///
/// Returns a `ViewError` describing why no quiz could be started.
pub async fn start_quiz(quiz_loop: &QuizLoopService) -> Result<QuizVm, ViewError> {
    let session = quiz_loop
        .start_quiz()
        .await
        .map_err(|err| ViewError::from_quiz(&err))?;
    Ok(QuizVm::new(session))
}
