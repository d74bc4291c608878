//! The stored message record.

use super::{MessageContent, MessageId};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A message filed in its receiver's inbox.
///
/// # Invariants
///
/// - `id` is positive and unique within the store that assigned it
/// - `content` is never empty
/// - `timestamp` is the clock reading taken when the message was stored
///
/// Serialised as
/// `{ "id", "senderId", "receiverId", "content", "timestamp" }` with the
/// timestamp in RFC 3339 form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: MessageId,
    sender_id: UserId,
    receiver_id: UserId,
    content: MessageContent,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a message stamped with the current clock reading.
    #[must_use]
    pub fn new(
        id: MessageId,
        sender_id: UserId,
        receiver_id: UserId,
        content: MessageContent,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            sender_id,
            receiver_id,
            content,
            timestamp: clock.utc(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the sender's identifier.
    #[must_use]
    pub const fn sender_id(&self) -> UserId {
        self.sender_id
    }

    /// Returns the receiver's identifier.
    #[must_use]
    pub const fn receiver_id(&self) -> UserId {
        self.receiver_id
    }

    /// Returns the message body.
    #[must_use]
    pub const fn content(&self) -> &MessageContent {
        &self.content
    }

    /// Returns when the message was stored.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
