mod fraction;
mod ids;
mod question;
mod summary;

pub use fraction::{Fraction, Operation, ParseOperationError, combine};
pub use ids::QuestionId;
pub use question::{
    DENOMINATOR_RANGE, NUMERATOR_RANGE, Question, QuestionDraft, QuestionError, QuestionField,
    ValidatedQuestion,
};
pub use summary::{ResultTier, ScoreSummary, percentage};
