use crate::{AuthProvider, ExternalIdentity};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session handed out by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Provider-issued user id
    pub user_uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub provider: AuthProvider,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_uid: impl Into<String>, email: Option<String>, provider: AuthProvider) -> Self {
        Self {
            user_uid: user_uid.into(),
            email,
            display_name: None,
            photo_url: None,
            provider,
            signed_in_at: Utc::now(),
        }
    }

    /// The identity this session vouches for
    pub fn to_identity(&self) -> ExternalIdentity {
        ExternalIdentity {
            email: self.email.clone(),
            provider_uid: self.user_uid.clone(),
            display_name: self.display_name.clone(),
            photo_url: self.photo_url.clone(),
        }
    }
}
