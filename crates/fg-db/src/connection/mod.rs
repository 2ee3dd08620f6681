pub mod database;
pub mod database_options;
