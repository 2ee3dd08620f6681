use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_CAPACITY: usize = 1;
pub const MAX_CAPACITY: usize = 100;
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// High scores kept per player
    pub capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl LedgerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.capacity < MIN_CAPACITY || self.capacity > MAX_CAPACITY {
            return Err(ConfigError::ledger(format!(
                "ledger.capacity must be {}-{}, got {}",
                MIN_CAPACITY, MAX_CAPACITY, self.capacity
            )));
        }

        Ok(())
    }
}
