use crate::codec::non_blank;
use crate::{CoreError, Result as CoreResult};

/// What the player typed on the register screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Local checks only. Runs before any collaborator is called.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.password != self.confirm_password {
            return Err(CoreError::password_mismatch());
        }

        if non_blank(Some(&self.email)).is_none() {
            return Err(CoreError::validation("Email is required.", Some("email")));
        }

        if self.password.is_empty() {
            return Err(CoreError::validation("Password is required.", Some("password")));
        }

        Ok(())
    }

    pub fn display_name(&self) -> Option<&str> {
        non_blank(Some(&self.name))
    }
}
