//! Identifier and validated scalar types for the user domain.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive identifier of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidUserId`] when the value is zero or
    /// negative.
    pub const fn new(value: i64) -> Result<Self, UserDomainError> {
        if value <= 0 {
            return Err(UserDomainError::InvalidUserId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty display name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a validated username.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyUsername`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(UserDomainError::EmptyUsername);
        }
        Ok(Self(raw))
    }

    /// Returns the username as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the username and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
