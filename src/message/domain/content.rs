//! Validated message body.

use super::MessageDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text body of a message. Never empty.
///
/// # Examples
///
/// ```
/// use postbox::message::domain::MessageContent;
///
/// assert!(MessageContent::new("").is_err());
/// assert_eq!(MessageContent::new("hi").expect("non-empty").as_str(), "hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageContent(String);

impl MessageContent {
    /// Creates validated message content.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError::EmptyContent`] when the text is empty.
    pub fn new(text: impl Into<String>) -> Result<Self, MessageDomainError> {
        let raw = text.into();
        if raw.is_empty() {
            return Err(MessageDomainError::EmptyContent);
        }
        Ok(Self(raw))
    }

    /// Returns the content as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MessageContent {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
