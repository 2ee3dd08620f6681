pub mod app_context;
pub mod auth_state;
pub mod destination;
pub mod navigator;
