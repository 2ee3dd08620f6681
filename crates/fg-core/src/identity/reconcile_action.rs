use crate::{NewProfile, ProfilePatch};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of reconciling a fresh sign-in against stored profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReconcileAction {
    /// Link the identity to a profile that already owns the email
    Merge {
        target_profile_id: Uuid,
        patch: ProfilePatch,
    },
    /// First time this email is seen
    Create(NewProfile),
}

impl ReconcileAction {
    pub fn is_merge(&self) -> bool {
        matches!(self, Self::Merge { .. })
    }

    pub fn target_profile_id(&self) -> Option<Uuid> {
        match self {
            Self::Merge {
                target_profile_id, ..
            } => Some(*target_profile_id),
            Self::Create(_) => None,
        }
    }
}
