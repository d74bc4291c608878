//! Domain model for the user registry.
//!
//! Users are immutable identity records. A caller-supplied [`User`] may carry
//! an invalid identifier; validation happens when it is converted into a
//! [`UserId`].

mod error;
mod ids;
mod user;

pub use error::UserDomainError;
pub use ids::{UserId, Username};
pub use user::User;
