mod quiz;
mod result;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::QuizView;
pub use result::ResultPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};
