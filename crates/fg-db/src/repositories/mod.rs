mod row;

pub mod sqlite_auth_service;
pub mod sqlite_profile_store;
pub mod sqlite_score_store;
