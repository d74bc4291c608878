//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces that the message service requires
//! from infrastructure. Adapters implement these ports to connect the
//! service to a concrete storage backend.

pub mod store;

pub use store::{MessageStore, MessageStoreError, MessageStoreResult};
