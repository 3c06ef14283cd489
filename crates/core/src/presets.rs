//! Built-in question set used when the player does not author their own.

use crate::model::{Operation, Question, QuestionId, ValidatedQuestion};

const DEFAULT_SET: [(u32, u32, u32, Operation); 15] = [
    (2, 3, 1, Operation::Add),
    (3, 7, 1, Operation::Add),
    (1, 3, 0, Operation::Subtract),
    (4, 5, 1, Operation::Add),
    (5, 8, 2, Operation::Add),
    (7, 9, 1, Operation::Subtract),
    (3, 4, 1, Operation::Add),
    (5, 6, 1, Operation::Subtract),
    (2, 5, 2, Operation::Add),
    (8, 10, 3, Operation::Subtract),
    (1, 2, 1, Operation::Add),
    (6, 7, 2, Operation::Subtract),
    (3, 8, 4, Operation::Add),
    (9, 11, 2, Operation::Subtract),
    (4, 9, 3, Operation::Add),
];

/// The default questions, in order, with ids `1..=15`.
///
/// # Panics
///
/// Panics if a preset entry violates the question invariants.
#[must_use]
pub fn default_questions() -> Vec<Question> {
    (1_u64..)
        .zip(DEFAULT_SET)
        .map(|(id, (num1, den, num2, op))| {
            ValidatedQuestion::from_parts(num1, den, num2, den, op)
                .expect("preset questions are valid")
                .assign_id(QuestionId::new(id))
        })
        .collect()
}
