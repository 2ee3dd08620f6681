/// Running score for a round. Consecutive answers of the same kind weigh more:
/// the n-th correct answer in a row adds `n * step`, the n-th wrong one in a
/// row takes away `n * step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakScorer {
    step: i64,
    consecutive_correct: u32,
    consecutive_wrong: u32,
    score: i64,
}

impl StreakScorer {
    pub fn new(step: i64) -> Self {
        Self {
            step,
            consecutive_correct: 0,
            consecutive_wrong: 0,
            score: 0,
        }
    }

    /// Apply one answer and return the score change it caused
    pub fn record(&mut self, correct: bool) -> i64 {
        let delta = if correct {
            self.consecutive_correct += 1;
            self.consecutive_wrong = 0;
            i64::from(self.consecutive_correct) * self.step
        } else {
            self.consecutive_wrong += 1;
            self.consecutive_correct = 0;
            -(i64::from(self.consecutive_wrong) * self.step)
        };

        self.score += delta;
        delta
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn consecutive_correct(&self) -> u32 {
        self.consecutive_correct
    }

    pub fn consecutive_wrong(&self) -> u32 {
        self.consecutive_wrong
    }
}
