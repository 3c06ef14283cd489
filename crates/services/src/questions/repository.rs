use quiz_core::model::{Question, QuestionId};

/// In-memory, insertion-ordered list of authored questions.
///
/// Lives for the whole process and is never persisted. Duplicate ids are
/// accepted as-is; `remove` drops every entry with the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomQuestionRepository {
    questions: Vec<Question>,
}

impl CustomQuestionRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Remove all questions with `id`, returning how many were dropped.
    pub fn remove(&mut self, id: QuestionId) -> usize {
        let before = self.questions.len();
        self.questions.retain(|q| q.id() != id);
        before - self.questions.len()
    }

    #[must_use]
    pub fn list(&self) -> &[Question] {
        &self.questions
    }

    /// Owned copy used as the active set of a custom quiz.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Question> {
        self.questions.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Operation, ValidatedQuestion};

    fn question(id: u64, num1: u32, den: u32, num2: u32, op: Operation) -> Question {
        ValidatedQuestion::from_parts(num1, den, num2, den, op)
            .unwrap()
            .assign_id(QuestionId::new(id))
    }

    #[test]
    fn add_then_remove_leaves_repository_empty() {
        let mut repo = CustomQuestionRepository::new();
        let q = question(17, 2, 3, 1, Operation::Add);
        let id = q.id();
        repo.add(q);
        assert_eq!(repo.len(), 1);

        assert_eq!(repo.remove(id), 1);
        assert!(repo.list().is_empty());
        assert!(repo.is_empty());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut repo = CustomQuestionRepository::new();
        repo.add(question(3, 1, 4, 1, Operation::Add));
        repo.add(question(1, 3, 4, 1, Operation::Subtract));
        repo.add(question(2, 2, 4, 1, Operation::Add));

        let ids: Vec<u64> = repo.list().iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn duplicate_ids_are_kept_and_removed_together() {
        let mut repo = CustomQuestionRepository::new();
        repo.add(question(5, 1, 4, 1, Operation::Add));
        repo.add(question(5, 3, 4, 1, Operation::Subtract));
        repo.add(question(6, 2, 4, 1, Operation::Add));
        assert_eq!(repo.len(), 3);

        assert_eq!(repo.remove(QuestionId::new(5)), 2);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.list()[0].id(), QuestionId::new(6));
    }

    #[test]
    fn removing_missing_id_is_a_noop() {
        let mut repo = CustomQuestionRepository::new();
        repo.add(question(1, 1, 2, 1, Operation::Add));
        assert_eq!(repo.remove(QuestionId::new(99)), 0);
        assert_eq!(repo.len(), 1);
    }
}
