//! Contracts for the external services the game relies on.
//!
//! Implementations report every I/O failure as
//! [`CoreError::CollaboratorUnavailable`](crate::CoreError::CollaboratorUnavailable)
//! and never retry on their own.

pub mod auth_service;
pub mod profile_store;
pub mod score_store;
