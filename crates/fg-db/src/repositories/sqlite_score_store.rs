use crate::DbError;
use crate::repositories::row::column;

use fg_core::codec::{parse_timestamp_millis, parse_uuid};
use fg_core::{CoreError, ErrorLocation, Result as CoreResult, ScoreEntry, ScoreStore};

use std::panic::Location;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

/// Score rows keyed by entry id and owned by a profile.
pub struct SqliteScoreStore {
    pool: SqlitePool,
}

impl SqliteScoreStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreStore for SqliteScoreStore {
    async fn list_for_user(&self, user_id: Uuid) -> CoreResult<Vec<ScoreEntry>> {
        let rows = sqlx::query(
            r#"
              SELECT id, score, recorded_at
              FROM scores
              WHERE user_id = ?
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        rows.iter().map(score_from_row).collect()
    }

    async fn insert(&self, user_id: Uuid, entry: &ScoreEntry) -> CoreResult<()> {
        let result = sqlx::query(
            r#"
              INSERT INTO scores (id, user_id, score, recorded_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(entry.id.to_string())
        .bind(user_id.to_string())
        .bind(entry.score)
        .bind(entry.recorded_at.timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(DbError::from);

        match result {
            Ok(_) => Ok(()),
            Err(e) if e.is_foreign_key_violation() => Err(CoreError::ProfileNotFound {
                id: user_id,
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, user_id: Uuid, entry_id: Uuid) -> CoreResult<()> {
        sqlx::query("DELETE FROM scores WHERE user_id = ? AND id = ?")
            .bind(user_id.to_string())
            .bind(entry_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}

fn score_from_row(row: &SqliteRow) -> CoreResult<ScoreEntry> {
    let id: String = column(row, "id")?;
    let recorded_at: i64 = column(row, "recorded_at")?;

    Ok(ScoreEntry {
        id: parse_uuid(&id, "id")?,
        score: column(row, "score")?,
        recorded_at: parse_timestamp_millis(recorded_at, "recorded_at")?,
    })
}
