pub mod answer_outcome;
pub mod country;
pub mod game_round;
pub mod question;
pub mod round_rules;
pub mod streak_scorer;
