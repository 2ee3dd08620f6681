use fg_db::Database;

use fg_core::{NewProfile, ProfileStore, UserProfile};

use sqlx::SqlitePool;

/// In-memory database with migrations run
pub async fn create_test_db() -> Database {
    Database::in_memory()
        .await
        .expect("Failed to create test database")
}

/// Stores a profile so score rows have an owner
#[allow(dead_code)]
pub async fn create_test_profile(db: &Database, email: &str) -> UserProfile {
    db.profile_store()
        .create(NewProfile {
            email: email.to_string(),
            display_name: "Test Player".to_string(),
            provider_uid: format!("uid-{email}"),
            photo_url: None,
        })
        .await
        .expect("Failed to create test profile")
}

/// Writes a raw score row, bypassing the store's encoding
#[allow(dead_code)]
pub async fn insert_raw_score(pool: &SqlitePool, id: &str, user_id: &str, score: i64, at: i64) {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("INSERT INTO scores (id, user_id, score, recorded_at) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(user_id)
        .bind(score)
        .bind(at)
        .execute(pool)
        .await
        .expect("Failed to insert raw score");
}
