//! Explicit application state, passed to whatever drives the screens.

use crate::{AuthState, Destination, Navigator, Result as CoreResult, Session};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    session: Option<Session>,
    session_resolved: bool,
    navigator: Navigator,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auth_state(&self) -> AuthState {
        match (&self.session, self.session_resolved) {
            (_, false) => AuthState::Loading,
            (Some(session), true) => AuthState::SignedIn(session.clone()),
            (None, true) => AuthState::SignedOut,
        }
    }

    /// Record the session reported by the auth collaborator.
    /// Losing the session drops any open screens.
    pub fn set_session(&mut self, session: Option<Session>) {
        if session.is_none() {
            self.navigator.reset();
        }
        self.session = session;
        self.session_resolved = true;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn sign_out(&mut self) {
        self.set_session(None);
    }

    pub fn navigate(&mut self, destination: Destination) -> CoreResult<()> {
        self.navigator.push(destination)
    }

    pub fn back(&mut self) -> Option<Destination> {
        self.navigator.pop()
    }

    pub fn current_screen(&self) -> Option<Destination> {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }
}
