use crate::{AuthProvider, ExternalIdentity, Result as CoreResult, Session};

use async_trait::async_trait;

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Fails with `InvalidCredentials` when the pair does not match an account
    async fn sign_in_with_password(&self, email: &str, password: &str) -> CoreResult<Session>;

    /// Fails with `EmailInUse` when an account already owns the email
    async fn sign_up_with_password(&self, email: &str, password: &str) -> CoreResult<Session>;

    /// Fails with `OAuthDenied` when the provider refuses or is unavailable
    async fn sign_in_with_oauth(&self, provider: AuthProvider) -> CoreResult<ExternalIdentity>;

    async fn current_session(&self) -> CoreResult<Option<Session>>;

    async fn sign_out(&self) -> CoreResult<()>;
}
