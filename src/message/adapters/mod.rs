//! Storage adapters for the message module.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryMessageStore`]: Thread-safe, process-lifetime [`MessageStore`]
//!   backend
//!
//! [`MessageStore`]: crate::message::ports::MessageStore

pub mod memory;
