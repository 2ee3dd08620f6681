pub mod auth_provider;
pub mod external_identity;
pub mod new_profile;
pub mod profile_patch;
pub mod score_entry;
pub mod session;
pub mod user_profile;
