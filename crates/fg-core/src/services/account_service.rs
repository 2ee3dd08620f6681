//! Sign-in, registration and profile reconciliation.

use crate::{
    AuthProvider, AuthService, CoreError, ExternalIdentity, IdentityReconciler, ProfileStore,
    ReconcileAction, RegistrationForm, Result as CoreResult, Session, UserProfile,
};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};

#[derive(Clone)]
pub struct AccountService {
    auth: Arc<dyn AuthService>,
    profiles: Arc<dyn ProfileStore>,
    reconciler: IdentityReconciler,
}

impl AccountService {
    pub fn new(
        auth: Arc<dyn AuthService>,
        profiles: Arc<dyn ProfileStore>,
        reconciler: IdentityReconciler,
    ) -> Self {
        Self {
            auth,
            profiles,
            reconciler,
        }
    }

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> CoreResult<Session> {
        let session = self
            .auth
            .sign_in_with_password(email.trim(), password)
            .await?;
        info!("User {} logged in with password", session.user_uid);
        Ok(session)
    }

    /// Create a password account and its profile.
    ///
    /// The form is checked before anything is sent to the auth service. If
    /// the email already belongs to a profile (say, from a GitHub sign-in)
    /// the new account is merged into it.
    pub async fn register(&self, form: &RegistrationForm) -> CoreResult<UserProfile> {
        form.validate()?;

        let session = self
            .auth
            .sign_up_with_password(form.email.trim(), &form.password)
            .await?;
        info!("User {} registered", session.user_uid);

        let mut identity = session.to_identity();
        if let Some(name) = form.display_name() {
            identity.display_name = Some(name.to_string());
        }

        self.complete_sign_in(&identity).await
    }

    /// OAuth sign-in followed by profile reconciliation
    pub async fn sign_in_with_oauth(&self, provider: AuthProvider) -> CoreResult<UserProfile> {
        let identity = self.auth.sign_in_with_oauth(provider).await?;
        info!(
            "User {} signed in with {}",
            identity.provider_uid,
            provider.display_name()
        );
        self.complete_sign_in(&identity).await
    }

    /// Create or merge the profile for an identity that has just signed in.
    ///
    /// A create that loses a race for the email to a concurrent sign-in is
    /// turned into a merge with the profile that won.
    pub async fn complete_sign_in(&self, identity: &ExternalIdentity) -> CoreResult<UserProfile> {
        let email = IdentityReconciler::merge_key(identity)?;
        let existing = self.profiles.find_by_email(email).await?;

        match self.apply(identity, existing).await {
            Err(CoreError::DuplicateProfile { email, .. }) => {
                warn!("Profile for {} was created concurrently, merging", email);
                let winner = self.profiles.find_by_email(&email).await?;
                self.apply(identity, winner).await
            }
            other => other,
        }
    }

    pub async fn current_session(&self) -> CoreResult<Option<Session>> {
        self.auth.current_session().await
    }

    /// Profile of the signed-in user, created on first use
    pub async fn current_profile(&self) -> CoreResult<UserProfile> {
        let session = self
            .auth
            .current_session()
            .await?
            .ok_or_else(|| CoreError::not_signed_in())?;

        let identity = session.to_identity();
        let email = IdentityReconciler::merge_key(&identity)?;

        match self.profiles.find_by_email(email).await? {
            Some(profile) => Ok(profile),
            None => self.complete_sign_in(&identity).await,
        }
    }

    pub async fn sign_out(&self) -> CoreResult<()> {
        self.auth.sign_out().await?;
        info!("User logged out");
        Ok(())
    }

    async fn apply(
        &self,
        identity: &ExternalIdentity,
        existing: Option<UserProfile>,
    ) -> CoreResult<UserProfile> {
        match self.reconciler.reconcile(identity, move |_| existing)? {
            ReconcileAction::Create(new_profile) => {
                let profile = self.profiles.create(new_profile).await?;
                info!("Created profile {} for {}", profile.id, profile.email);
                Ok(profile)
            }
            ReconcileAction::Merge {
                target_profile_id,
                patch,
            } => {
                self.profiles.update(target_profile_id, &patch).await?;
                info!(
                    "Merged identity {} into profile {}",
                    patch.provider_uid, target_profile_id
                );

                self.profiles
                    .find_by_id(target_profile_id)
                    .await?
                    .ok_or_else(|| CoreError::ProfileNotFound {
                        id: target_profile_id,
                        location: ErrorLocation::from(Location::caller()),
                    })
            }
        }
    }
}
