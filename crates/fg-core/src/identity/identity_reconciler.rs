//! Create-or-merge decision for freshly authenticated identities.
//!
//! Email is the only merge key. An identity without one is rejected rather
//! than given a profile nobody could ever match again.

use crate::codec::non_blank;
use crate::{
    CoreError, ExternalIdentity, NewProfile, ProfilePatch, ReconcileAction, Result as CoreResult,
    UserProfile,
};

pub const DEFAULT_DISPLAY_NAME: &str = "Unknown User";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityReconciler {
    default_display_name: String,
}

impl Default for IdentityReconciler {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_NAME)
    }
}

impl IdentityReconciler {
    pub fn new(default_display_name: impl Into<String>) -> Self {
        Self {
            default_display_name: default_display_name.into(),
        }
    }

    /// Name given to created profiles whose identity carries none
    pub fn default_display_name(&self) -> &str {
        &self.default_display_name
    }

    /// The email profiles are matched on, trimmed. Blank counts as missing.
    #[track_caller]
    pub fn merge_key(candidate: &ExternalIdentity) -> CoreResult<&str> {
        non_blank(candidate.email.as_deref()).ok_or_else(|| CoreError::missing_email())
    }

    /// Decide between creating a profile and merging into the one `lookup`
    /// finds for the candidate's email.
    #[track_caller]
    pub fn reconcile<F>(&self, candidate: &ExternalIdentity, lookup: F) -> CoreResult<ReconcileAction>
    where
        F: FnOnce(&str) -> Option<UserProfile>,
    {
        let email = Self::merge_key(candidate)?;
        let display_name = non_blank(candidate.display_name.as_deref());
        let photo_url = non_blank(candidate.photo_url.as_deref());

        let action = match lookup(email) {
            Some(existing) => ReconcileAction::Merge {
                target_profile_id: existing.id,
                patch: ProfilePatch {
                    provider_uid: candidate.provider_uid.clone(),
                    display_name: display_name.map(String::from),
                    photo_url: photo_url.map(String::from),
                },
            },
            None => ReconcileAction::Create(NewProfile {
                email: email.to_string(),
                display_name: display_name
                    .unwrap_or(self.default_display_name())
                    .to_string(),
                provider_uid: candidate.provider_uid.clone(),
                photo_url: photo_url.map(String::from),
            }),
        };

        Ok(action)
    }
}
