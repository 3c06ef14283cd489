use serde::Serialize;

/// `round(100 * score / total)`, with halves rounded up. Zero when `total` is zero.
#[must_use]
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score.min(total));
    let total = u64::from(total);
    let rounded = (200 * score + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(100)
}

/// Qualitative band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResultTier {
    Perfect,
    Excellent,
    Good,
    KeepLearning,
}

impl ResultTier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => Self::Perfect,
            80..=99 => Self::Excellent,
            60..=79 => Self::Good,
            _ => Self::KeepLearning,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect! You're a fraction master!",
            Self::Excellent => "Excellent work! Keep it up!",
            Self::Good => "Good job! Practice makes perfect!",
            Self::KeepLearning => "Keep learning! You'll get better!",
        }
    }
}

/// Final score of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    score: u32,
    total: u32,
    percentage: u32,
    tier: ResultTier,
}

impl ScoreSummary {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        let score = score.min(total);
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            tier: ResultTier::from_percentage(percentage),
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.total - self.score
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn tier(&self) -> ResultTier {
        self.tier
    }
}
