//! The user identity record.

use super::{UserDomainError, UserId, Username};
use serde::{Deserialize, Serialize};

/// An identity record for a messaging participant.
///
/// Records created by the registry always carry a positive identifier and a
/// non-empty username. Records supplied by callers are references and are not
/// validated until [`User::user_id`] is called.
///
/// Serialised as `{ "id": 1, "userName": "alice" }`.
///
/// # Examples
///
/// ```
/// use postbox::user::domain::User;
///
/// let reference = User::new(0, "nobody");
/// assert!(reference.user_id().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: i64,
    user_name: String,
}

impl User {
    /// Creates an unvalidated user reference.
    #[must_use]
    pub fn new(id: i64, user_name: impl Into<String>) -> Self {
        Self {
            id,
            user_name: user_name.into(),
        }
    }

    /// Creates a user record from validated registry values.
    #[must_use]
    pub fn registered(id: UserId, user_name: Username) -> Self {
        Self {
            id: id.value(),
            user_name: user_name.into_inner(),
        }
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Validates and returns the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidUserId`] when the identifier is zero
    /// or negative.
    pub const fn user_id(&self) -> Result<UserId, UserDomainError> {
        UserId::new(self.id)
    }
}
