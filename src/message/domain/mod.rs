//! Domain model for messages.
//!
//! A message is immutable once stored. Identifiers and timestamps are
//! assigned by the store; callers supply only sender, receiver, and content.

mod content;
mod error;
mod ids;
mod message;

pub use content::MessageContent;
pub use error::MessageDomainError;
pub use ids::MessageId;
pub use message::Message;
