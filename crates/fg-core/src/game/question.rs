use crate::Country;

use serde::{Deserialize, Serialize};

/// One "tap the flag of ..." prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub choices: Vec<Country>,
    pub correct_index: usize,
}

impl Question {
    pub fn answer(&self) -> Country {
        self.choices[self.correct_index]
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }
}
