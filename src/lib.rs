//! Mock Users API - A list view backed by a simulated backend
//!
//! The crate pairs an in-memory user store, exposed through async calls
//! that settle after an artificial delay, with a headless list view that
//! re-fetches the whole collection after every mutation.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User and story records
//! - **infra**: In-memory store, story catalog, latency and cancellation
//! - **services**: The mock API (latency + validation over repositories)
//! - **ui**: Presentation layer view models
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Scripted create / update / delete walkthrough
//! cargo run -- demo
//!
//! # Interactive list view without artificial latency
//! cargo run -- shell --instant
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod ui;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{CreateUser, Story, UpdateUser, User};
pub use errors::{AppError, AppResult};
pub use infra::{cancellable, Latency, UserStore};
pub use services::{ServiceContainer, Services};
pub use ui::UserList;
