use crate::{NewProfile, ProfilePatch, Result as CoreResult, UserProfile};

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<UserProfile>>;

    async fn find_by_id(&self, id: Uuid) -> CoreResult<Option<UserProfile>>;

    /// May fail with `DuplicateProfile` if the email was claimed meanwhile
    async fn create(&self, profile: NewProfile) -> CoreResult<UserProfile>;

    /// Fails with `ProfileNotFound` when no profile has `id`
    async fn update(&self, id: Uuid, patch: &ProfilePatch) -> CoreResult<()>;
}
