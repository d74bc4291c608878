//! Message storage and delivery for Postbox.
//!
//! Messages are short text records addressed from one registered user to
//! another. Each message is filed in its receiver's inbox, receives a unique
//! identifier that is never reused, and is stamped with the time it was sent.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: [`domain::Message`], [`domain::MessageId`], [`domain::MessageContent`]
//! - **Ports**: [`ports::MessageStore`], the capability every storage backend implements
//! - **Adapters**: [`adapters::memory::InMemoryMessageStore`]
//! - **Services**: [`services::MessageService`], which validates caller input
//!   and checks the user registry before touching the store
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use postbox::message::{adapters::memory::InMemoryMessageStore, services::MessageService};
//! use postbox::user::{adapters::memory::InMemoryUserRepository, services::UserDirectoryService};
//! use mockable::DefaultClock;
//!
//! # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
//! let users = Arc::new(InMemoryUserRepository::new());
//! let directory = UserDirectoryService::new(Arc::clone(&users));
//! let messages = MessageService::new(Arc::new(InMemoryMessageStore::new(DefaultClock)), users);
//!
//! let alice = directory.create_user("Alice").await.expect("create Alice");
//! let bob = directory.create_user("Bob").await.expect("create Bob");
//!
//! messages
//!     .send_message(Some(&alice), Some(&bob), "Hello, Bob!")
//!     .await
//!     .expect("send");
//!
//! let inbox = messages.get_messages(Some(&bob)).await.expect("inbox");
//! assert_eq!(inbox.len(), 1);
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
