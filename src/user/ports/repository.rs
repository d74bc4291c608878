//! Repository port for user registration and lookup.

use crate::user::domain::{User, UserId, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User registry persistence contract.
///
/// Implementations must assign identifiers starting at 1 and never hand out
/// the same identifier twice.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Registers a new user and returns the stored record with its assigned
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when the backend fails.
    async fn create(&self, username: Username) -> UserRepositoryResult<User>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when no user has the given identifier.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Checks whether a user with the given identifier is registered.
    async fn exists(&self, id: UserId) -> UserRepositoryResult<bool>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
