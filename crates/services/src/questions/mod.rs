mod authoring;
mod ids;
mod repository;

pub use authoring::validate_and_build;
pub use ids::QuestionIdAllocator;
pub use repository::CustomQuestionRepository;
