//! User registry for Postbox.
//!
//! Users are the identities that send and receive messages. The registry
//! assigns positive, sequential identifiers and answers existence checks for
//! the message service. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
