use fg_core::{CoreError, Result as CoreResult};

use sqlx::sqlite::SqliteRow;
use sqlx::{Decode, Row, Sqlite, Type};

/// Read a column, reporting a missing or mistyped value as a decode error
#[track_caller]
pub(crate) fn column<'r, T>(row: &'r SqliteRow, name: &str) -> CoreResult<T>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    match row.try_get(name) {
        Ok(value) => Ok(value),
        Err(e) => Err(CoreError::decode(name, e.to_string())),
    }
}
