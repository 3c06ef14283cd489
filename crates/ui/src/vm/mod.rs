mod authoring_vm;
mod pie_vm;
mod question_vm;
mod results_vm;

pub use authoring_vm::{CustomQuestionItemVm, map_custom_questions, start_custom_label};
pub use pie_vm::{PieVm, SliceFill, SliceVm, map_pie};
pub use question_vm::{FeedbackVm, QuestionVm, hint_text, map_feedback, map_question};
pub use results_vm::{ResultsVm, map_results};
