mod common;

use common::create_test_db;

use fg_core::{AuthProvider, AuthService, CoreError};
use fg_db::Database;

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_new_email_when_signing_up_then_session_is_persisted() {
    // Given: No accounts
    let db = create_test_db().await;
    let auth = db.auth_service();

    // When: Signing up
    let session = auth
        .sign_up_with_password("ada@example.com", "hunter22")
        .await
        .unwrap();

    // Then: The session is current and belongs to the password provider
    assert_that!(session.provider, eq(AuthProvider::Password));
    let current = auth.current_session().await.unwrap();
    assert_that!(current, some(anything()));
    let current = current.unwrap();
    assert_that!(current.user_uid, eq(&session.user_uid));
    assert_that!(current.email, some(eq("ada@example.com")));
}

#[tokio::test]
async fn given_taken_email_when_signing_up_then_email_in_use() {
    let db = create_test_db().await;
    let auth = db.auth_service();
    auth.sign_up_with_password("ada@example.com", "hunter22")
        .await
        .unwrap();

    let result = auth.sign_up_with_password("ada@example.com", "other-pw").await;

    assert!(matches!(result, Err(CoreError::EmailInUse { .. })));
}

#[tokio::test]
async fn given_short_password_when_signing_up_then_validation_error() {
    let db = create_test_db().await;
    let auth = db.auth_service();

    let result = auth.sign_up_with_password("ada@example.com", "abc").await;

    assert!(matches!(result, Err(CoreError::Validation { .. })));
    assert_that!(auth.current_session().await.unwrap(), none());
}

#[tokio::test]
async fn given_account_when_signing_in_with_right_password_then_same_uid() {
    // Given: A signed-up, then signed-out account
    let db = create_test_db().await;
    let auth = db.auth_service();
    let signed_up = auth
        .sign_up_with_password("ada@example.com", "hunter22")
        .await
        .unwrap();
    auth.sign_out().await.unwrap();

    // When: Signing back in
    let session = auth
        .sign_in_with_password("ada@example.com", "hunter22")
        .await
        .unwrap();

    // Then: The account uid is stable
    assert_that!(session.user_uid, eq(&signed_up.user_uid));
}

#[tokio::test]
async fn given_account_when_signing_in_with_other_casing_then_registered_email_in_session() {
    // Given
    let db = create_test_db().await;
    let auth = db.auth_service();
    let signed_up = auth
        .sign_up_with_password("ada@example.com", "hunter22")
        .await
        .unwrap();
    auth.sign_out().await.unwrap();

    // When
    let session = auth
        .sign_in_with_password("ADA@Example.com", "hunter22")
        .await
        .unwrap();
    let taken = auth.sign_up_with_password("Ada@example.com", "hunter22").await;

    // Then
    assert_that!(session.user_uid, eq(&signed_up.user_uid));
    assert_that!(session.email, some(eq("ada@example.com")));
    assert!(matches!(taken, Err(CoreError::EmailInUse { .. })));
}

#[tokio::test]
async fn given_account_when_signing_in_with_wrong_password_then_invalid_credentials() {
    let db = create_test_db().await;
    let auth = db.auth_service();
    auth.sign_up_with_password("ada@example.com", "hunter22")
        .await
        .unwrap();
    auth.sign_out().await.unwrap();

    let wrong_password = auth.sign_in_with_password("ada@example.com", "hunter23").await;
    let unknown_email = auth.sign_in_with_password("bob@example.com", "hunter22").await;

    assert!(matches!(wrong_password, Err(CoreError::InvalidCredentials { .. })));
    assert!(matches!(unknown_email, Err(CoreError::InvalidCredentials { .. })));
    assert_that!(auth.current_session().await.unwrap(), none());
}

#[tokio::test]
async fn given_local_client_when_signing_in_with_github_then_oauth_denied() {
    let db = create_test_db().await;
    let auth = db.auth_service();

    let result = auth.sign_in_with_oauth(AuthProvider::GitHub).await;

    assert!(matches!(result, Err(CoreError::OAuthDenied { .. })));
}

#[tokio::test]
async fn given_session_when_database_reopened_then_session_survives() {
    // Given: A file-backed database with a signed-in user
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data").join("flag-game.db");
    let db = Database::connect(&path).await.unwrap();
    db.auth_service()
        .sign_up_with_password("ada@example.com", "hunter22")
        .await
        .unwrap();
    db.close().await;

    // When: Opening the same file again
    let reopened = Database::connect(&path).await.unwrap();

    // Then: The session is still there
    let current = reopened.auth_service().current_session().await.unwrap();
    assert_that!(current, some(anything()));
    assert_that!(current.unwrap().email, some(eq("ada@example.com")));
}
