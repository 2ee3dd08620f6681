//! Score entry - one retained result in a user's high-score list.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single finished game that earned a place in the user's top scores.
/// Entries are never mutated; the ledger only inserts and evicts them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: Uuid,
    pub score: i64,
    pub recorded_at: DateTime<Utc>,
}

impl ScoreEntry {
    /// Create an entry recorded right now, to the millisecond
    pub fn new(score: i64) -> Self {
        Self::recorded(score, Utc::now().trunc_subsecs(3))
    }

    /// Create an entry with an explicit timestamp
    pub fn recorded(score: i64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            score,
            recorded_at,
        }
    }
}
