use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Identity has no email to match profiles on {location}")]
    MissingEmail { location: ErrorLocation },

    #[error("Collaborator unavailable ({collaborator}): {message} {location}")]
    CollaboratorUnavailable {
        collaborator: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Password and confirmation do not match {location}")]
    PasswordMismatch { location: ErrorLocation },

    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Email already in use: {email} {location}")]
    EmailInUse {
        email: String,
        location: ErrorLocation,
    },

    #[error("OAuth sign-in denied by {provider}: {message} {location}")]
    OAuthDenied {
        provider: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("No user is signed in {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("A profile for {email} already exists {location}")]
    DuplicateProfile {
        email: String,
        location: ErrorLocation,
    },

    #[error("Profile not found: {id} {location}")]
    ProfileNotFound {
        id: uuid::Uuid,
        location: ErrorLocation,
    },

    #[error("Malformed record, field {field}: {message} {location}")]
    Decode {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Choice {choice} is not one of the {available} flags shown {location}")]
    InvalidChoice {
        choice: usize,
        available: usize,
        location: ErrorLocation,
    },

    #[error("The round is already finished {location}")]
    RoundFinished { location: ErrorLocation },

    #[error("Navigation stack is full ({max_depth} screens) {location}")]
    NavigationOverflow {
        max_depth: usize,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn missing_email() -> Self {
        Self::MissingEmail {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn password_mismatch() -> Self {
        Self::PasswordMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        Self::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap any I/O failure raised by an auth or storage collaborator.
    #[track_caller]
    pub fn unavailable<S: Into<String>>(collaborator: &'static str, message: S) -> Self {
        Self::CollaboratorUnavailable {
            collaborator,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Decode {
            field: field.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Only collaborator I/O failures are worth trying again; every other
    /// variant reports a decision or a bad input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::CollaboratorUnavailable { .. })
    }

    /// Text fit for showing to the player. Never includes source locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingEmail { .. } => {
                "Your account has no email address, so it cannot be linked.".to_string()
            }
            Self::CollaboratorUnavailable { .. } => {
                "The service is unavailable right now. Please try again.".to_string()
            }
            Self::PasswordMismatch { .. } => "Passwords do not match.".to_string(),
            Self::InvalidCredentials { .. } => "Invalid email or password.".to_string(),
            Self::EmailInUse { email, .. } => {
                format!("The email address {email} is already in use by another account.")
            }
            Self::OAuthDenied { provider, .. } => format!("{provider} sign-in failed."),
            Self::NotSignedIn { .. } => "Please log in first.".to_string(),
            Self::DuplicateProfile { .. } => {
                "A profile for this email already exists. Please log in again.".to_string()
            }
            Self::ProfileNotFound { .. } => "Your profile could not be found.".to_string(),
            Self::Decode { .. } => "Stored data is damaged and could not be read.".to_string(),
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidChoice { available, .. } => {
                format!("Pick a flag between 1 and {available}.")
            }
            Self::RoundFinished { .. } => "This round is over.".to_string(),
            Self::NavigationOverflow { .. } => "Too many screens open.".to_string(),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
