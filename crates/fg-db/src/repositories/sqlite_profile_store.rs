use crate::DbError;
use crate::repositories::row::column;

use fg_core::codec::{parse_timestamp_millis, parse_uuid};
use fg_core::{
    CoreError, ErrorLocation, NewProfile, ProfilePatch, ProfileStore, Result as CoreResult,
    UserProfile,
};

use std::panic::Location;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct SqliteProfileStore {
    pool: SqlitePool,
}

impl SqliteProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<UserProfile>> {
        let row = sqlx::query(
            r#"
              SELECT id, email, display_name, provider_uid, photo_url,
                     created_at, updated_at
              FROM profiles
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        row.as_ref().map(profile_from_row).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> CoreResult<Option<UserProfile>> {
        let row = sqlx::query(
            r#"
              SELECT id, email, display_name, provider_uid, photo_url,
                     created_at, updated_at
              FROM profiles
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        row.as_ref().map(profile_from_row).transpose()
    }

    async fn create(&self, profile: NewProfile) -> CoreResult<UserProfile> {
        let created = UserProfile::from_new(profile);

        let result = sqlx::query(
            r#"
              INSERT INTO profiles (
                  id, email, display_name, provider_uid, photo_url,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(created.id.to_string())
        .bind(&created.email)
        .bind(&created.display_name)
        .bind(&created.provider_uid)
        .bind(&created.photo_url)
        .bind(created.created_at.timestamp_millis())
        .bind(created.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(DbError::from);

        match result {
            Ok(_) => {
                debug!("Inserted profile {}", created.id);
                Ok(created)
            }
            Err(e) if e.is_unique_violation() => Err(CoreError::DuplicateProfile {
                email: created.email,
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, id: Uuid, patch: &ProfilePatch) -> CoreResult<()> {
        // Absent patch fields keep the stored value
        let result = sqlx::query(
            r#"
              UPDATE profiles
              SET provider_uid = ?,
                  display_name = COALESCE(?, display_name),
                  photo_url = COALESCE(?, photo_url),
                  updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&patch.provider_uid)
        .bind(&patch.display_name)
        .bind(&patch.photo_url)
        .bind(Utc::now().timestamp_millis())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::ProfileNotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

fn profile_from_row(row: &SqliteRow) -> CoreResult<UserProfile> {
    let id: String = column(row, "id")?;
    let created_at: i64 = column(row, "created_at")?;
    let updated_at: i64 = column(row, "updated_at")?;

    Ok(UserProfile {
        id: parse_uuid(&id, "id")?,
        email: column(row, "email")?,
        display_name: column(row, "display_name")?,
        provider_uid: column(row, "provider_uid")?,
        photo_url: column(row, "photo_url")?,
        created_at: parse_timestamp_millis(created_at, "created_at")?,
        updated_at: parse_timestamp_millis(updated_at, "updated_at")?,
    })
}
