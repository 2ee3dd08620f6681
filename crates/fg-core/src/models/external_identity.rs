use serde::{Deserialize, Serialize};

/// What an auth provider tells us about the person who just signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    pub email: Option<String>,
    pub provider_uid: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl ExternalIdentity {
    pub fn new(provider_uid: impl Into<String>) -> Self {
        Self {
            email: None,
            provider_uid: provider_uid.into(),
            display_name: None,
            photo_url: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }
}
