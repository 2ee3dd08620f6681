//! User profile - one per distinct person, matched across sign-in methods by email.

use crate::{NewProfile, ProfilePatch};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable identifier, never changes after creation
    pub id: Uuid,
    /// Merge key between password and OAuth identities
    pub email: String,
    pub display_name: String,
    /// UID of the most recent identity linked to this profile
    pub provider_uid: String,
    pub photo_url: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Materialize a profile from a create payload
    pub fn from_new(new_profile: NewProfile) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: new_profile.email,
            display_name: new_profile.display_name,
            provider_uid: new_profile.provider_uid,
            photo_url: new_profile.photo_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the provider-specific fields. Email and id stay as they are.
    pub fn apply_patch(&mut self, patch: &ProfilePatch) {
        self.provider_uid = patch.provider_uid.clone();
        if let Some(display_name) = &patch.display_name {
            self.display_name = display_name.clone();
        }
        if let Some(photo_url) = &patch.photo_url {
            self.photo_url = Some(photo_url.clone());
        }
        self.updated_at = Utc::now();
    }
}
