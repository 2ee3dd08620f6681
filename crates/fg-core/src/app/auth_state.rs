use crate::Session;

/// What the entry screen should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Session not resolved yet
    Loading,
    SignedOut,
    SignedIn(Session),
}
