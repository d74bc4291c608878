//! Error types for message input validation.

use crate::user::domain::UserDomainError;
use thiserror::Error;

/// Errors returned while validating caller-supplied message input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageDomainError {
    /// No sender was supplied.
    #[error("sender is required")]
    MissingSender,

    /// No receiver was supplied.
    #[error("receiver is required")]
    MissingReceiver,

    /// No user was supplied.
    #[error("user is required")]
    MissingUser,

    /// A user identifier failed validation.
    #[error(transparent)]
    User(#[from] UserDomainError),

    /// The message identifier is zero or negative.
    #[error("invalid message id {0}, expected a positive integer")]
    InvalidMessageId(i64),

    /// The message content is empty.
    #[error("message content must not be empty")]
    EmptyContent,
}
