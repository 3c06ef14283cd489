mod authoring;
mod forms;
mod fraction_circle;
mod question;
mod quiz;
mod results;
mod start;
mod state;
mod toast;

pub use authoring::AuthoringView;
pub use forms::{AnswerForm, AuthoringForm, DraftField};
pub use fraction_circle::{FractionCircle, FractionText};
pub use question::QuestionView;
pub use quiz::QuizView;
pub use results::ResultsView;
pub use start::StartView;
pub use state::{QuizState, use_quiz_state_provider};
pub use toast::ToastHost;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
