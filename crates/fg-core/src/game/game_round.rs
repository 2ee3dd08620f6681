//! A single round of the flag quiz.

use crate::{
    AnswerOutcome, Country, CoreError, Question, Result as CoreResult, RoundRules, StreakScorer,
};

use std::panic::Location;

use error_location::ErrorLocation;
use rand::Rng;
use rand::seq::SliceRandom;

/// Drives one round: deals questions, checks answers, keeps the score.
///
/// The random source is injected so a seeded generator replays the same round.
pub struct GameRound<R: Rng> {
    rules: RoundRules,
    pool: Vec<Country>,
    question: Question,
    current_question: u32,
    scorer: StreakScorer,
    finished: bool,
    rng: R,
}

impl<R: Rng> GameRound<R> {
    pub fn new(rules: RoundRules, mut rng: R) -> CoreResult<Self> {
        rules.validate()?;

        let mut pool = Country::ALL.to_vec();
        let question = Self::deal(&mut pool, rules.choices_per_question, &mut rng);

        Ok(Self {
            rules,
            pool,
            question,
            current_question: 1,
            scorer: StreakScorer::new(rules.streak_points),
            finished: false,
            rng,
        })
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    /// 1-based number of the question being asked
    pub fn current_question(&self) -> u32 {
        self.current_question
    }

    pub fn total_questions(&self) -> u32 {
        self.rules.questions_per_round
    }

    pub fn score(&self) -> i64 {
        self.scorer.score()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Answer the current question with a 0-based choice index and move on.
    #[track_caller]
    pub fn answer(&mut self, choice: usize) -> CoreResult<AnswerOutcome> {
        if self.finished {
            return Err(CoreError::RoundFinished {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let available = self.question.choices.len();
        if choice >= available {
            return Err(CoreError::InvalidChoice {
                choice,
                available,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let correct = self.question.is_correct(choice);
        let answer = self.question.answer();
        let delta = self.scorer.record(correct);

        if self.current_question >= self.rules.questions_per_round {
            self.finished = true;
        } else {
            self.current_question += 1;
            self.question = Self::deal(&mut self.pool, self.rules.choices_per_question, &mut self.rng);
        }

        Ok(AnswerOutcome {
            correct,
            answer,
            delta,
            score: self.scorer.score(),
            finished: self.finished,
        })
    }

    fn deal(pool: &mut [Country], choices: usize, rng: &mut R) -> Question {
        pool.shuffle(rng);
        Question {
            choices: pool[..choices].to_vec(),
            correct_index: rng.random_range(0..choices),
        }
    }
}
