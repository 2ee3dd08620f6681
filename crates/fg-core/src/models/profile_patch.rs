use serde::{Deserialize, Serialize};

/// Fields a merge is allowed to overwrite on an existing profile.
/// `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub provider_uid: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}
