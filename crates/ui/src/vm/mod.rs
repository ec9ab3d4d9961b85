mod quiz_vm;
mod summary_vm;
mod time_fmt;

pub use quiz_vm::{
    OptionState, OptionVm, QuestionVm, QuizIntent, QuizOutcome, QuizVm, start_quiz,
};
pub use summary_vm::{CorrectionVm, SummaryVm};
