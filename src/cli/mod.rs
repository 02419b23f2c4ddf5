//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `demo` - Scripted walkthrough of the list view
//! - `shell` - Interactive list view
//! - `users` - Print the user collection as JSON
//! - `stories` - Print the story listing as JSON

pub mod args;

pub use args::{Cli, Commands};
