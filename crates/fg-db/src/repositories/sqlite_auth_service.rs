//! Local email/password accounts and the persisted session of the terminal
//! client.
//!
//! Passwords are stored as Argon2id PHC strings. There is no OAuth provider
//! to talk to locally, so OAuth sign-in is always refused.

use crate::{DbError, Result as DbErrorResult};
use crate::repositories::row::column;

use fg_core::codec::parse_timestamp_millis;
use fg_core::{
    AuthProvider, AuthService, CoreError, ErrorLocation, ExternalIdentity, Result as CoreResult,
    Session,
};

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

/// Shortest password accepted at sign-up
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct SqliteAuthService {
    pool: SqlitePool,
}

impl SqliteAuthService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn save_session(&self, session: &Session) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT OR REPLACE INTO current_session (
                  slot, user_uid, email, display_name, photo_url,
                  provider, signed_in_at
              ) VALUES (1, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&session.user_uid)
        .bind(&session.email)
        .bind(&session.display_name)
        .bind(&session.photo_url)
        .bind(session.provider.as_str())
        .bind(session.signed_in_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl AuthService for SqliteAuthService {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> CoreResult<Session> {
        let row = sqlx::query("SELECT uid, email, password_hash FROM accounts WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?;

        let Some(row) = row else {
            debug!("No account for {}", email);
            return Err(CoreError::invalid_credentials());
        };

        let uid: String = column(&row, "uid")?;
        let stored_email: String = column(&row, "email")?;
        let password_hash: String = column(&row, "password_hash")?;
        verify_password(password, &password_hash)?;

        // The session carries the email as registered, whatever casing was typed
        let session = Session::new(uid, Some(stored_email), AuthProvider::Password);
        self.save_session(&session).await?;
        Ok(session)
    }

    async fn sign_up_with_password(&self, email: &str, password: &str) -> CoreResult<Session> {
        validate_password(password)?;
        let password_hash = hash_password(password)?;
        let uid = Uuid::new_v4().to_string();

        let result = sqlx::query(
            r#"
              INSERT INTO accounts (uid, email, password_hash, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(&uid)
        .bind(email)
        .bind(&password_hash)
        .bind(Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(DbError::from);

        match result {
            Ok(_) => {}
            Err(e) if e.is_unique_violation() => {
                return Err(CoreError::EmailInUse {
                    email: email.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e.into()),
        }

        let session = Session::new(uid, Some(email.to_string()), AuthProvider::Password);
        self.save_session(&session).await?;
        Ok(session)
    }

    async fn sign_in_with_oauth(&self, provider: AuthProvider) -> CoreResult<ExternalIdentity> {
        warn!("{} sign-in requested but no OAuth provider is configured", provider);
        Err(CoreError::OAuthDenied {
            provider: provider.display_name().to_string(),
            message: "OAuth sign-in is not available in the local client".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn current_session(&self) -> CoreResult<Option<Session>> {
        let row = sqlx::query(
            r#"
              SELECT user_uid, email, display_name, photo_url, provider, signed_in_at
              FROM current_session
              WHERE slot = 1
              "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        row.as_ref().map(session_from_row).transpose()
    }

    async fn sign_out(&self) -> CoreResult<()> {
        sqlx::query("DELETE FROM current_session")
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}

fn session_from_row(row: &SqliteRow) -> CoreResult<Session> {
    let provider: String = column(row, "provider")?;
    let signed_in_at: i64 = column(row, "signed_in_at")?;

    Ok(Session {
        user_uid: column(row, "user_uid")?,
        email: column(row, "email")?,
        display_name: column(row, "display_name")?,
        photo_url: column(row, "photo_url")?,
        provider: provider.parse()?,
        signed_in_at: parse_timestamp_millis(signed_in_at, "signed_in_at")?,
    })
}

fn validate_password(password: &str) -> CoreResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters."),
            Some("password"),
        ));
    }

    Ok(())
}

fn hash_password(password: &str) -> DbErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

fn verify_password(password: &str, hash: &str) -> CoreResult<()> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| CoreError::decode("password_hash", e.to_string()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| CoreError::invalid_credentials())
}
