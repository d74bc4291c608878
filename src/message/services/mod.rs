//! Application services for message delivery.

mod messaging;

pub use messaging::{MessageService, MessageServiceError, MessageServiceResult};
