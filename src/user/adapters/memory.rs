//! In-memory user registry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{User, UserId, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user registry.
///
/// Identifiers are assigned sequentially from 1 under the same lock that
/// guards the user map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, User>,
    last_id: i64,
}

impl InMemoryUserRepository {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered users.
    ///
    /// Returns `0` if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().map(|guard| guard.users.len()).unwrap_or(0)
    }

    /// Returns `true` if no users are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn backend_failure(err: impl ToString) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, username: Username) -> UserRepositoryResult<User> {
        let mut state = self.state.write().map_err(backend_failure)?;

        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| backend_failure("user id space exhausted"))?;
        let id = UserId::new(next).map_err(UserRepositoryError::persistence)?;

        let user = User::registered(id, username);
        state.users.insert(id, user.clone());
        state.last_id = next;
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(backend_failure)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn exists(&self, id: UserId) -> UserRepositoryResult<bool> {
        let state = self.state.read().map_err(backend_failure)?;
        Ok(state.users.contains_key(&id))
    }
}
