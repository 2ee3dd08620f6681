use serde::{Deserialize, Serialize};

/// Payload for creating a profile the first time an email is seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub email: String,
    pub display_name: String,
    pub provider_uid: String,
    pub photo_url: Option<String>,
}
