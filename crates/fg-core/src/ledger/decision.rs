use crate::ScoreEntry;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the caller must do to a user's score collection after a game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Decision {
    /// New entry to store, present when the score qualified
    pub insert: Option<ScoreEntry>,
    /// Entries to delete so the collection stays within capacity
    pub evict: Vec<Uuid>,
}

impl Decision {
    pub fn qualified(&self) -> bool {
        self.insert.is_some()
    }

    /// Nothing to write
    pub fn is_noop(&self) -> bool {
        self.insert.is_none() && self.evict.is_empty()
    }
}
