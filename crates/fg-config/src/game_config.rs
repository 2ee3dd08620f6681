use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_QUESTIONS_PER_ROUND: u32 = 1;
pub const MAX_QUESTIONS_PER_ROUND: u32 = 50;
pub const DEFAULT_QUESTIONS_PER_ROUND: u32 = 10;

pub const MIN_CHOICES_PER_QUESTION: usize = 2;
/// Size of the flag pool
pub const MAX_CHOICES_PER_QUESTION: usize = 11;
pub const DEFAULT_CHOICES_PER_QUESTION: usize = 3;

pub const MIN_STREAK_POINTS: i64 = 1;
pub const MAX_STREAK_POINTS: i64 = 100;
pub const DEFAULT_STREAK_POINTS: i64 = 5;

/// Quiz round settings.
///
/// Streak scoring multiplies `streak_points` by the length of the current
/// run of right (or wrong) answers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub questions_per_round: u32,
    /// Flags shown per question
    pub choices_per_question: usize,
    pub streak_points: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            questions_per_round: DEFAULT_QUESTIONS_PER_ROUND,
            choices_per_question: DEFAULT_CHOICES_PER_QUESTION,
            streak_points: DEFAULT_STREAK_POINTS,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.questions_per_round < MIN_QUESTIONS_PER_ROUND
            || self.questions_per_round > MAX_QUESTIONS_PER_ROUND
        {
            return Err(ConfigError::game(format!(
                "game.questions_per_round must be {}-{}, got {}",
                MIN_QUESTIONS_PER_ROUND, MAX_QUESTIONS_PER_ROUND, self.questions_per_round
            )));
        }

        if self.choices_per_question < MIN_CHOICES_PER_QUESTION
            || self.choices_per_question > MAX_CHOICES_PER_QUESTION
        {
            return Err(ConfigError::game(format!(
                "game.choices_per_question must be {}-{}, got {}",
                MIN_CHOICES_PER_QUESTION, MAX_CHOICES_PER_QUESTION, self.choices_per_question
            )));
        }

        if self.streak_points < MIN_STREAK_POINTS || self.streak_points > MAX_STREAK_POINTS {
            return Err(ConfigError::game(format!(
                "game.streak_points must be {}-{}, got {}",
                MIN_STREAK_POINTS, MAX_STREAK_POINTS, self.streak_points
            )));
        }

        Ok(())
    }
}
