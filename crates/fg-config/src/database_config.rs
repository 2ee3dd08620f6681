use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use std::path::Path;

use serde::Deserialize;

pub const MIN_MAX_CONNECTIONS: u32 = 1;
pub const MAX_MAX_CONNECTIONS: u32 = 32;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub const MIN_BUSY_TIMEOUT_SECS: u64 = 1;
pub const MAX_BUSY_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
    pub max_connections: u32,
    /// How long a writer waits on a locked database
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::database("database.path cannot be empty"));
        }

        // Keep the database inside the config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections < MIN_MAX_CONNECTIONS || self.max_connections > MAX_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.busy_timeout_secs < MIN_BUSY_TIMEOUT_SECS
            || self.busy_timeout_secs > MAX_BUSY_TIMEOUT_SECS
        {
            return Err(ConfigError::database(format!(
                "database.busy_timeout_secs must be {}-{}, got {}",
                MIN_BUSY_TIMEOUT_SECS, MAX_BUSY_TIMEOUT_SECS, self.busy_timeout_secs
            )));
        }

        Ok(())
    }
}
