use crate::{Result as CoreResult, ScoreEntry};

use async_trait::async_trait;
use uuid::Uuid;

/// Per-profile score collections. Keyed by profile id so scores follow the
/// person across merged sign-in methods.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Entries in no particular order
    async fn list_for_user(&self, user_id: Uuid) -> CoreResult<Vec<ScoreEntry>>;

    async fn insert(&self, user_id: Uuid, entry: &ScoreEntry) -> CoreResult<()>;

    /// Deleting an entry that is already gone is not an error
    async fn delete(&self, user_id: Uuid, entry_id: Uuid) -> CoreResult<()>;
}
