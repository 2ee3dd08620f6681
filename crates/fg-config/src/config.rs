use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, GameConfig, LedgerConfig, LoggingConfig, ProfileConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub game: GameConfig,
    pub ledger: LedgerConfig,
    pub profile: ProfileConfig,
}

impl Config {
    /// Load config from disk and environment.
    ///
    /// Loading order:
    /// 1. Check for FG_CONFIG_DIR env var, else use ./.flag-game/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: FG_CONFIG_DIR env var > ./.flag-game/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.logging.validate()?;
        self.game.validate()?;
        self.ledger.validate()?;
        self.profile.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Log file path when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(file)))
    }

    /// Log configuration summary
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  database: {} (max {} connections, busy timeout {}s)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
        info!(
            "  game: {} questions, {} flags each, {} points per streak step",
            self.game.questions_per_round,
            self.game.choices_per_question,
            self.game.streak_points
        );
        info!("  ledger: keep top {}", self.ledger.capacity);
        info!(
            "  profile: default name {:?}",
            self.profile.default_display_name
        );
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("FG_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "FG_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "FG_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // Logging
        Self::apply_env_parse("FG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("FG_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("FG_LOG_FILE", &mut self.logging.file);

        // Game
        Self::apply_env_parse(
            "FG_GAME_QUESTIONS_PER_ROUND",
            &mut self.game.questions_per_round,
        );
        Self::apply_env_parse(
            "FG_GAME_CHOICES_PER_QUESTION",
            &mut self.game.choices_per_question,
        );
        Self::apply_env_parse("FG_GAME_STREAK_POINTS", &mut self.game.streak_points);

        // Ledger
        Self::apply_env_parse("FG_LEDGER_CAPACITY", &mut self.ledger.capacity);

        // Profile
        Self::apply_env_string(
            "FG_PROFILE_DEFAULT_DISPLAY_NAME",
            &mut self.profile.default_display_name,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
