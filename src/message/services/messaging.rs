//! Service layer for sending, listing, and deleting messages.

use crate::message::{
    domain::{Message, MessageContent, MessageDomainError, MessageId},
    ports::{MessageStore, MessageStoreError},
};
use crate::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for message operations.
#[derive(Debug, Error)]
pub enum MessageServiceError {
    /// Caller input failed validation.
    #[error(transparent)]
    InvalidArgument(#[from] MessageDomainError),
    /// A referenced user is not in the registry.
    #[error("user does not exist: {0}")]
    UnknownUser(UserId),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] MessageStoreError),
    /// Registry lookup failed.
    #[error(transparent)]
    Registry(#[from] UserRepositoryError),
}

impl MessageServiceError {
    /// Returns `true` when the caller supplied malformed input.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` when a referenced user or message does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::UnknownUser(_) => true,
            Self::Store(err) => err.is_not_found(),
            Self::InvalidArgument(_) | Self::Registry(_) => false,
        }
    }
}

/// Result type for message service operations.
pub type MessageServiceResult<T> = Result<T, MessageServiceError>;

/// Message orchestration service.
///
/// Validates caller-supplied identities and content, confirms that every
/// referenced user is registered, then delegates to the store.
#[derive(Clone)]
pub struct MessageService<S, U>
where
    S: MessageStore,
    U: UserRepository,
{
    store: Arc<S>,
    users: Arc<U>,
}

impl<S, U> MessageService<S, U>
where
    S: MessageStore,
    U: UserRepository,
{
    /// Creates a new message service.
    #[must_use]
    pub const fn new(store: Arc<S>, users: Arc<U>) -> Self {
        Self { store, users }
    }

    /// Sends a message from `sender` to `receiver`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::InvalidArgument`] when either user is
    /// missing or has a non-positive identifier, or the content is empty;
    /// [`MessageServiceError::UnknownUser`] when either user is not
    /// registered; otherwise any store or registry failure.
    pub async fn send_message(
        &self,
        sender: Option<&User>,
        receiver: Option<&User>,
        content: impl Into<String>,
    ) -> MessageServiceResult<Message> {
        let (sender_id, receiver_id, body) = validate_send(sender, receiver, content.into())
            .inspect_err(|err| warn!(error = %err, "rejected message send"))?;

        self.ensure_registered(sender_id).await?;
        self.ensure_registered(receiver_id).await?;

        let message = self.store.send(sender_id, receiver_id, body).await?;
        debug!(
            message_id = %message.id(),
            sender_id = %sender_id,
            receiver_id = %receiver_id,
            "stored message"
        );
        Ok(message)
    }

    /// Returns every message in the user's inbox, in the order received.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::InvalidArgument`] when the user is
    /// missing or has a non-positive identifier,
    /// [`MessageServiceError::UnknownUser`] when the user is not registered,
    /// or any store or registry failure.
    pub async fn get_messages(&self, user: Option<&User>) -> MessageServiceResult<Vec<Message>> {
        let user_id = self.registered_user(user).await?;
        Ok(self.store.list_for_user(user_id).await?)
    }

    /// Deletes a message from the user's inbox.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::InvalidArgument`] when the user is
    /// missing or either identifier is non-positive,
    /// [`MessageServiceError::UnknownUser`] when the user is not registered,
    /// and [`MessageServiceError::Store`] carrying
    /// [`MessageStoreError::UserNotFound`] or
    /// [`MessageStoreError::MessageNotFound`] when there is nothing to delete.
    pub async fn delete_message(
        &self,
        user: Option<&User>,
        message_id: i64,
    ) -> MessageServiceResult<()> {
        let (user_id, id) = validate_delete(user, message_id)
            .inspect_err(|err| warn!(error = %err, "rejected message delete"))?;
        self.ensure_registered(user_id).await?;

        self.store.delete(user_id, id).await?;
        debug!(message_id = %id, user_id = %user_id, "deleted message");
        Ok(())
    }

    /// Returns the user's messages ordered from oldest to newest.
    ///
    /// # Errors
    ///
    /// Same as [`MessageService::get_messages`].
    pub async fn get_messages_sorted_by_timestamp(
        &self,
        user: Option<&User>,
    ) -> MessageServiceResult<Vec<Message>> {
        let user_id = self.registered_user(user).await?;
        Ok(self.store.list_sorted_by_timestamp(user_id).await?)
    }

    async fn registered_user(&self, user: Option<&User>) -> MessageServiceResult<UserId> {
        let user_id = require_user(user, MessageDomainError::MissingUser)
            .inspect_err(|err| warn!(error = %err, "rejected inbox lookup"))?;
        self.ensure_registered(user_id).await?;
        Ok(user_id)
    }

    async fn ensure_registered(&self, user_id: UserId) -> MessageServiceResult<()> {
        if self.users.exists(user_id).await? {
            Ok(())
        } else {
            Err(MessageServiceError::UnknownUser(user_id))
        }
    }
}

fn require_user(
    user: Option<&User>,
    missing: MessageDomainError,
) -> Result<UserId, MessageDomainError> {
    let reference = user.ok_or(missing)?;
    Ok(reference.user_id()?)
}

fn validate_send(
    sender: Option<&User>,
    receiver: Option<&User>,
    content: String,
) -> Result<(UserId, UserId, MessageContent), MessageDomainError> {
    let sender_id = require_user(sender, MessageDomainError::MissingSender)?;
    let receiver_id = require_user(receiver, MessageDomainError::MissingReceiver)?;
    let body = MessageContent::new(content)?;
    Ok((sender_id, receiver_id, body))
}

fn validate_delete(
    user: Option<&User>,
    message_id: i64,
) -> Result<(UserId, MessageId), MessageDomainError> {
    let user_id = require_user(user, MessageDomainError::MissingUser)?;
    let id = MessageId::new(message_id)?;
    Ok((user_id, id))
}
