use serde::{Deserialize, Serialize};

/// Screens reachable from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Game,
    HighScores,
}
