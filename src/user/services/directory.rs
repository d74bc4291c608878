//! Service layer for user registration and lookup.

use crate::user::{
    domain::{User, UserDomainError, UserId, Username},
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Caller input failed validation.
    #[error(transparent)]
    InvalidArgument(#[from] UserDomainError),
    /// No user has the requested identifier.
    #[error("user not found: {0}")]
    NotFound(UserId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user directory service operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User registration and lookup service.
#[derive(Clone)]
pub struct UserDirectoryService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserDirectoryService<R>
where
    R: UserRepository,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a user with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::InvalidArgument`] when the username is
    /// empty, or [`UserDirectoryError::Repository`] when persistence fails.
    pub async fn create_user(&self, username: &str) -> UserDirectoryResult<User> {
        let name = Username::new(username).inspect_err(|err| {
            warn!(error = %err, "rejected user registration");
        })?;
        let user = self.repository.create(name).await?;
        debug!(user_id = user.id(), user_name = user.user_name(), "registered user");
        Ok(user)
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::InvalidArgument`] when `id` is not
    /// positive, [`UserDirectoryError::NotFound`] when no such user exists,
    /// or [`UserDirectoryError::Repository`] when lookup fails.
    pub async fn get_user_by_id(&self, id: i64) -> UserDirectoryResult<User> {
        let user_id = UserId::new(id)?;
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or(UserDirectoryError::NotFound(user_id))
    }
}
