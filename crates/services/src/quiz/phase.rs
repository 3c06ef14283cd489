use std::fmt;

/// Stage of quiz progression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    #[default]
    NotStarted,
    InProgress,
    ShowingFeedback,
    Complete,
}

impl QuizPhase {
    #[must_use]
    pub fn is_started(self) -> bool {
        !matches!(self, Self::NotStarted)
    }
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::ShowingFeedback => "showing feedback",
            Self::Complete => "complete",
        })
    }
}

/// Which question set a quiz was started with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QuestionSource {
    #[default]
    Default,
    Custom,
}

impl QuestionSource {
    #[must_use]
    pub fn from_use_custom(use_custom: bool) -> Self {
        if use_custom { Self::Custom } else { Self::Default }
    }
}
