use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How a session was established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthProvider {
    /// Email and password account
    #[default]
    Password,
    /// GitHub OAuth
    GitHub,
}

impl AuthProvider {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::GitHub => "github.com",
        }
    }

    /// Name shown to players
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Password => "Email",
            Self::GitHub => "GitHub",
        }
    }
}

impl FromStr for AuthProvider {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "password" => Ok(Self::Password),
            "github.com" => Ok(Self::GitHub),
            _ => Err(CoreError::Decode {
                field: "provider".to_string(),
                message: format!("unknown auth provider: {s}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
