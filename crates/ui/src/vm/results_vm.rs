use quiz_core::model::ScoreSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub message: &'static str,
    pub score_label: String,
    pub percentage_label: String,
    pub correct: u32,
    pub incorrect: u32,
}

impl From<&ScoreSummary> for ResultsVm {
    fn from(summary: &ScoreSummary) -> Self {
        Self {
            message: summary.tier().message(),
            score_label: format!("{}/{}", summary.score(), summary.total()),
            percentage_label: format!("Score: {}%", summary.percentage()),
            correct: summary.score(),
            incorrect: summary.incorrect(),
        }
    }
}

#[must_use]
pub fn map_results(summary: &ScoreSummary) -> ResultsVm {
    ResultsVm::from(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_partial_score() {
        let vm = map_results(&ScoreSummary::new(10, 15));
        assert_eq!(vm.score_label, "10/15");
        assert_eq!(vm.percentage_label, "Score: 67%");
        assert_eq!(vm.message, "Good job! Practice makes perfect!");
        assert_eq!(vm.incorrect, 5);
    }
}
