//! Identifier type for stored messages.

use super::MessageDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive identifier assigned to a message by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(i64);

impl MessageId {
    /// The first identifier handed out by an empty store.
    pub const FIRST: Self = Self(1);

    /// Creates a validated message identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError::InvalidMessageId`] when the value is zero
    /// or negative.
    pub const fn new(value: i64) -> Result<Self, MessageDomainError> {
        if value <= 0 {
            return Err(MessageDomainError::InvalidMessageId(value));
        }
        Ok(Self(value))
    }

    /// Returns the identifier following this one, or `None` on overflow.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
