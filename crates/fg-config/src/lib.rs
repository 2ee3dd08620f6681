mod config;
mod database_config;
mod error;
mod game_config;
mod ledger_config;
mod log_level;
mod logging_config;
mod profile_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use game_config::GameConfig;
pub use ledger_config::LedgerConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use profile_config::ProfileConfig;

const CONFIG_DIR_ENV: &str = "FG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".flag-game";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "flag-game.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
