use quiz_core::model::{Question, QuestionDraft, QuestionError};

use super::ids::QuestionIdAllocator;

/// Validate a draft and give it a fresh id.
///
/// Allocating the id is the only side effect; inserting the question into a
/// repository is left to the caller.
///
/// # Errors
///
/// Returns the first `QuestionError` found by `QuestionDraft::validate`. No id
/// is consumed on failure.
pub fn validate_and_build(
    draft: &QuestionDraft,
    ids: &mut QuestionIdAllocator,
) -> Result<Question, QuestionError> {
    let validated = draft.validate()?;
    Ok(validated.assign_id(ids.next_id()))
}
