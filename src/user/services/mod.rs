//! Application services for the user registry.

mod directory;

pub use directory::{UserDirectoryError, UserDirectoryResult, UserDirectoryService};
