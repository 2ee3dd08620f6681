use crate::{Decision, Result as CoreResult, ScoreEntry, ScoreLedger, ScoreStore};

use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

/// Runs the ledger against a user's stored scores.
///
/// Read, decide and write are separate collaborator calls. Two results saved
/// at the same moment can both insert; the next call trims the collection
/// back to capacity.
#[derive(Clone)]
pub struct HighScoreService {
    scores: Arc<dyn ScoreStore>,
    ledger: ScoreLedger,
}

impl HighScoreService {
    pub fn new(scores: Arc<dyn ScoreStore>, ledger: ScoreLedger) -> Self {
        Self { scores, ledger }
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Save `score` if it makes the user's top list, evicting whatever falls off.
    pub async fn record_game_result(&self, user_id: Uuid, score: i64) -> CoreResult<Decision> {
        let existing = self.scores.list_for_user(user_id).await?;
        let decision = self.ledger.record_if_qualifying(&existing, score);

        match &decision.insert {
            Some(entry) => {
                self.scores.insert(user_id, entry).await?;
                info!("Score {} saved for user {}", score, user_id);
            }
            None => debug!(
                "Score {} did not make the top {} for user {}",
                score,
                self.ledger.capacity(),
                user_id
            ),
        }

        for entry_id in &decision.evict {
            self.scores.delete(user_id, *entry_id).await?;
            info!(
                "Removed score entry {} to keep the top {}",
                entry_id,
                self.ledger.capacity()
            );
        }

        Ok(decision)
    }

    /// Best scores first
    pub async fn top_scores(&self, user_id: Uuid) -> CoreResult<Vec<ScoreEntry>> {
        let entries = self.scores.list_for_user(user_id).await?;
        Ok(self.ledger.rank(&entries))
    }
}
