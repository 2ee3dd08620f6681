use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_DISPLAY_NAME: &str = "Unknown User";
pub const MAX_DISPLAY_NAME_LENGTH: usize = 64;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Name given to new profiles whose identity carries none
    pub default_display_name: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            default_display_name: String::from(DEFAULT_DISPLAY_NAME),
        }
    }
}

impl ProfileConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let name = self.default_display_name.trim();
        if name.is_empty() {
            return Err(ConfigError::profile(
                "profile.default_display_name cannot be empty",
            ));
        }

        if name.chars().count() > MAX_DISPLAY_NAME_LENGTH {
            return Err(ConfigError::profile(format!(
                "profile.default_display_name must be at most {} characters",
                MAX_DISPLAY_NAME_LENGTH
            )));
        }

        Ok(())
    }
}
