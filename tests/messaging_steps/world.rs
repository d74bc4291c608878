//! Shared world state for messaging BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use postbox::message::{
    adapters::memory::InMemoryMessageStore,
    domain::Message,
    services::{MessageService, MessageServiceError},
};
use postbox::user::{
    adapters::memory::InMemoryUserRepository, domain::User, services::UserDirectoryService,
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestMessageService =
    MessageService<InMemoryMessageStore<DefaultClock>, InMemoryUserRepository>;

/// Scenario world for messaging behaviour tests.
pub struct MessagingWorld {
    pub directory: UserDirectoryService<InMemoryUserRepository>,
    pub service: TestMessageService,
    pub users: HashMap<String, User>,
    pub last_sent: Option<Message>,
    pub last_error: Option<MessageServiceError>,
}

impl MessagingWorld {
    /// Creates a world with no registered users.
    #[must_use]
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        Self {
            directory: UserDirectoryService::new(Arc::clone(&users)),
            service: MessageService::new(Arc::new(InMemoryMessageStore::new(DefaultClock)), users),
            users: HashMap::new(),
            last_sent: None,
            last_error: None,
        }
    }

    /// Returns a registered user by display name.
    pub fn user(&self, name: &str) -> Result<User, eyre::Report> {
        self.users
            .get(name)
            .cloned()
            .ok_or_else(|| eyre::eyre!("user {name} was not registered in this scenario"))
    }

    /// Records the outcome of a send.
    pub fn record_send(&mut self, result: Result<Message, MessageServiceError>) {
        match result {
            Ok(message) => {
                self.last_sent = Some(message);
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err),
        }
    }

    /// Records the outcome of a delete.
    pub fn record_delete(&mut self, result: Result<(), MessageServiceError>) {
        self.last_error = result.err();
    }
}

impl Default for MessagingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MessagingWorld {
    MessagingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
