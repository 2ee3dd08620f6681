use fg_core::{CoreError, ErrorLocation};

use std::io::Write;
use std::panic::Location;

use log::error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] fg_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] fg_db::DbError),

    #[error(transparent)]
    Game(#[from] CoreError),

    #[error("I/O error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing argument: {name} {location}")]
    MissingArgument {
        name: &'static str,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Round abandoned before the last question")]
    Abandoned,
}

impl CliError {
    #[track_caller]
    pub fn missing_argument(name: &'static str) -> Self {
        CliError::MissingArgument {
            name,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Log the full error and print the player-facing line to `out`.
    pub fn report<O: Write>(&self, out: &mut O) {
        error!("{self}");
        let _ = writeln!(out, "Error: {}", self.user_message());
    }

    /// Text printed to the player; locations stay in the log
    pub fn user_message(&self) -> String {
        match self {
            CliError::Game(e) => e.user_message(),
            CliError::Database(_) => {
                "The game data could not be opened. Please try again.".to_string()
            }
            CliError::MissingArgument { name, .. } => format!("Please provide --{name}."),
            CliError::Abandoned => "Round abandoned. Your score was not recorded.".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for CliError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        CliError::Io {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Json {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
