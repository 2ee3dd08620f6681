//! SQLite-backed collaborators for the flag game.

pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::Database;
pub use connection::database_options::DatabaseOptions;
pub use error::{DbError, Result};
pub use repositories::sqlite_auth_service::{MIN_PASSWORD_LENGTH, SqliteAuthService};
pub use repositories::sqlite_profile_store::SqliteProfileStore;
pub use repositories::sqlite_score_store::SqliteScoreStore;
