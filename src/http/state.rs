//! Shared state handed to every request handler.

use std::sync::Arc;

use mockable::DefaultClock;

use crate::message::{
    adapters::memory::InMemoryMessageStore, ports::MessageStore, services::MessageService,
};
use crate::user::{
    adapters::memory::InMemoryUserRepository, ports::UserRepository,
    services::UserDirectoryService,
};

/// Services shared across handlers.
///
/// Both services read the same user repository, so users registered through
/// `/user` are immediately visible to the message routes.
pub struct AppState<S, U>
where
    S: MessageStore,
    U: UserRepository,
{
    messages: Arc<MessageService<S, U>>,
    users: Arc<UserDirectoryService<U>>,
}

/// Application state backed by the in-memory adapters and the system clock.
pub type InMemoryAppState = AppState<InMemoryMessageStore<DefaultClock>, InMemoryUserRepository>;

impl<S, U> AppState<S, U>
where
    S: MessageStore,
    U: UserRepository,
{
    /// Wires the services over a message store and a user repository.
    #[must_use]
    pub fn new(store: Arc<S>, users: Arc<U>) -> Self {
        Self {
            messages: Arc::new(MessageService::new(store, Arc::clone(&users))),
            users: Arc::new(UserDirectoryService::new(users)),
        }
    }

    /// Returns the message service.
    #[must_use]
    pub fn messages(&self) -> &MessageService<S, U> {
        &self.messages
    }

    /// Returns the user directory service.
    #[must_use]
    pub fn users(&self) -> &UserDirectoryService<U> {
        &self.users
    }
}

impl InMemoryAppState {
    /// Creates state backed by fresh, empty in-memory adapters.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryMessageStore::new(DefaultClock)),
            Arc::new(InMemoryUserRepository::new()),
        )
    }
}

impl<S, U> Clone for AppState<S, U>
where
    S: MessageStore,
    U: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            messages: Arc::clone(&self.messages),
            users: Arc::clone(&self.users),
        }
    }
}
