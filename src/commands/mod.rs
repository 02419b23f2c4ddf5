//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod demo;
pub mod shell;
pub mod stories;
pub mod users;
