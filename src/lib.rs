//! Postbox: an internal messaging API.
//!
//! Registered users send short text messages to one another. Each message is
//! filed in its receiver's inbox, gets an identifier that is never reused,
//! and is stamped with the time it was sent.
//!
//! # Architecture
//!
//! Postbox follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business types and validation
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in-memory, HTTP)
//! - **Services**: Validation and orchestration over the ports
//!
//! # Modules
//!
//! - [`message`]: Message storage, inbox listing, and deletion
//! - [`user`]: User registration and lookup
//! - [`http`]: JSON API over both services
//! - [`config`]: Listen address configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod http;
pub mod message;
pub mod telemetry;
pub mod user;
