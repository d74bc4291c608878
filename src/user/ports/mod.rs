//! Port contracts for the user registry.
//!
//! Ports define infrastructure-agnostic interfaces used by the user and
//! message services.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
