use crate::Country;

use serde::{Deserialize, Serialize};

/// Result of answering one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The country that was asked for
    pub answer: Country,
    /// Score change caused by this answer
    pub delta: i64,
    /// Round score after this answer
    pub score: i64,
    /// True when this was the last question
    pub finished: bool,
}
