//! Adapter implementations for the user registry ports.

pub mod memory;
