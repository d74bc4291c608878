//! In-memory implementation of the `MessageStore` port.
//!
//! Inboxes live in a map keyed by receiver. A single [`RwLock`] guards both
//! the inboxes and the identifier counter, so concurrent sends never share an
//! identifier and an inbox is never observed half-appended. State lasts for
//! the lifetime of the value; nothing is persisted.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use mockable::Clock;

use crate::message::{
    domain::{Message, MessageContent, MessageId},
    ports::{MessageStore, MessageStoreError, MessageStoreResult},
};
use crate::user::domain::UserId;

/// In-memory implementation of [`MessageStore`].
///
/// # Example
///
/// ```
/// use postbox::message::adapters::memory::InMemoryMessageStore;
/// use mockable::DefaultClock;
///
/// let store = InMemoryMessageStore::new(DefaultClock);
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryMessageStore<C: Clock + Send + Sync> {
    state: Arc<RwLock<InboxState>>,
    clock: C,
}

#[derive(Debug)]
struct InboxState {
    inboxes: HashMap<UserId, Vec<Message>>,
    // `None` once the identifier space is exhausted.
    next_id: Option<MessageId>,
}

impl Default for InboxState {
    fn default() -> Self {
        Self {
            inboxes: HashMap::new(),
            next_id: Some(MessageId::FIRST),
        }
    }
}

impl<C: Clock + Send + Sync> InMemoryMessageStore<C> {
    /// Creates an empty store that stamps messages with `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            state: Arc::new(RwLock::new(InboxState::default())),
            clock,
        }
    }

    /// Returns the number of stored messages across all inboxes.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .read()
            .map(|guard| guard.inboxes.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Returns `true` if no messages are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn backend_failure(err: impl ToString) -> MessageStoreError {
    MessageStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C: Clock + Send + Sync> MessageStore for InMemoryMessageStore<C> {
    async fn send(
        &self,
        sender: UserId,
        receiver: UserId,
        content: MessageContent,
    ) -> MessageStoreResult<Message> {
        let mut state = self.state.write().map_err(backend_failure)?;

        let id = state
            .next_id
            .ok_or_else(|| backend_failure("message id space exhausted"))?;
        state.next_id = id.next();

        let message = Message::new(id, sender, receiver, content, &self.clock);
        state
            .inboxes
            .entry(receiver)
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    async fn list_for_user(&self, user: UserId) -> MessageStoreResult<Vec<Message>> {
        let state = self.state.read().map_err(backend_failure)?;
        Ok(state.inboxes.get(&user).cloned().unwrap_or_default())
    }

    async fn delete(&self, user: UserId, message_id: MessageId) -> MessageStoreResult<()> {
        let mut state = self.state.write().map_err(backend_failure)?;

        let inbox = state
            .inboxes
            .get_mut(&user)
            .ok_or(MessageStoreError::UserNotFound(user))?;
        let position = inbox
            .iter()
            .position(|message| message.id() == message_id)
            .ok_or(MessageStoreError::MessageNotFound {
                user_id: user,
                message_id,
            })?;

        inbox.remove(position);
        Ok(())
    }
}
