//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The user identifier is zero or negative.
    #[error("invalid user id {0}, expected a positive integer")]
    InvalidUserId(i64),

    /// The username is empty.
    #[error("username must not be empty")]
    EmptyUsername,
}
