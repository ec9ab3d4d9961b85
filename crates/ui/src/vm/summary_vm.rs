use quiz_core::model::{AnswerRecord, QuizSummary};

use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorrectionVm {
    pub question: String,
    pub selected: String,
    pub correct: String,
    pub line: String,
}

impl From<&AnswerRecord> for CorrectionVm {
    fn from(record: &AnswerRecord) -> Self {
        Self {
            question: record.question().to_string(),
            selected: record.selected_answer().to_string(),
            correct: record.correct_answer().to_string(),
            line: record.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub score_line: String,
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    pub elapsed: String,
    pub corrections: Vec<CorrectionVm>,
}

impl From<&QuizSummary> for SummaryVm {
    fn from(summary: &QuizSummary) -> Self {
        Self {
            score_line: summary.score_line(),
            correct: summary.correct(),
            incorrect: summary.incorrect(),
            total: summary.total(),
            elapsed: format_elapsed(summary.started_at(), summary.completed_at()),
            corrections: summary.corrections().iter().map(CorrectionVm::from).collect(),
        }
    }
}

impl SummaryVm {
    #[must_use]
    pub fn has_corrections(&self) -> bool {
        !self.corrections.is_empty()
    }
}
