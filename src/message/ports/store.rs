//! Storage port for message inboxes.
//!
//! Defines the narrow capability a storage backend must provide: file a
//! message under its receiver, list an inbox, and delete from an inbox.
//! Ordering by timestamp is derived from the inbox listing so that every
//! backend sorts identically.

use crate::message::domain::{Message, MessageContent, MessageId};
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message store operations.
pub type MessageStoreResult<T> = Result<T, MessageStoreError>;

/// Port for message storage.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Message IDs start at 1, are unique, and are never reused after deletion
/// - Messages are filed under their receiver; no sender index exists
/// - An inbox is never observed in a partially appended state
/// - Inputs are trusted; validation belongs to the calling service
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Stores a new message in the receiver's inbox.
    ///
    /// Assigns the next unused identifier and stamps the current time.
    /// Creates the inbox if the receiver has none yet.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Persistence`] when the backend fails.
    async fn send(
        &self,
        sender: UserId,
        receiver: UserId,
        content: MessageContent,
    ) -> MessageStoreResult<Message>;

    /// Returns the user's inbox in insertion order.
    ///
    /// Returns an empty vector when the user has no inbox.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Persistence`] when the backend fails.
    async fn list_for_user(&self, user: UserId) -> MessageStoreResult<Vec<Message>>;

    /// Removes a message from the user's inbox.
    ///
    /// The lookup is scoped to `user`'s inbox; a message filed under another
    /// receiver is reported as not found.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::UserNotFound`] when the user has no inbox,
    /// or [`MessageStoreError::MessageNotFound`] when the inbox holds no
    /// message with that identifier.
    async fn delete(&self, user: UserId, message_id: MessageId) -> MessageStoreResult<()>;

    /// Returns the messages addressed to `user`, oldest first.
    ///
    /// Messages with equal timestamps keep their insertion order.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`MessageStore::list_for_user`].
    async fn list_sorted_by_timestamp(&self, user: UserId) -> MessageStoreResult<Vec<Message>> {
        let mut messages = self.list_for_user(user).await?;
        messages.retain(|message| message.receiver_id() == user);
        messages.sort_by_key(Message::timestamp);
        Ok(messages)
    }
}

/// Errors returned by message store implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageStoreError {
    /// The user has never received a message.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// The user's inbox holds no message with this identifier.
    #[error("message {message_id} not found for user {user_id}")]
    MessageNotFound {
        /// Owner of the inbox that was searched.
        user_id: UserId,
        /// Identifier that was not found.
        message_id: MessageId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` when the error reports a missing user or message.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::MessageNotFound { .. })
    }
}
