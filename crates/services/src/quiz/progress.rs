/// Position within a running quiz, for the "Question N of M" line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based number of the current question.
    pub number: usize,
    pub total: usize,
    pub score: u32,
    pub is_last: bool,
}
