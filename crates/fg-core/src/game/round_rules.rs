use crate::{Country, CoreError, Result as CoreResult};

use serde::{Deserialize, Serialize};

pub const DEFAULT_QUESTIONS_PER_ROUND: u32 = 10;
pub const DEFAULT_CHOICES_PER_QUESTION: usize = 3;
pub const DEFAULT_STREAK_POINTS: i64 = 5;

pub const MIN_CHOICES_PER_QUESTION: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRules {
    pub questions_per_round: u32,
    pub choices_per_question: usize,
    pub streak_points: i64,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            questions_per_round: DEFAULT_QUESTIONS_PER_ROUND,
            choices_per_question: DEFAULT_CHOICES_PER_QUESTION,
            streak_points: DEFAULT_STREAK_POINTS,
        }
    }
}

impl RoundRules {
    pub fn validate(&self) -> CoreResult<()> {
        if self.questions_per_round == 0 {
            return Err(CoreError::validation(
                "a round needs at least one question",
                Some("questions_per_round"),
            ));
        }

        let pool = Country::ALL.len();
        if self.choices_per_question < MIN_CHOICES_PER_QUESTION
            || self.choices_per_question > pool
        {
            return Err(CoreError::validation(
                format!(
                    "choices_per_question must be {}-{}, got {}",
                    MIN_CHOICES_PER_QUESTION, pool, self.choices_per_question
                ),
                Some("choices_per_question"),
            ));
        }

        if self.streak_points <= 0 {
            return Err(CoreError::validation(
                "streak_points must be positive",
                Some("streak_points"),
            ));
        }

        Ok(())
    }
}
