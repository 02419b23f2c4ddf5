//! Domain layer - Core records and their payloads
//!
//! This module contains the records served by the mock API, independent
//! of how they are stored or rendered.

pub mod story;
pub mod user;

pub use story::{StoriesData, StoriesResponse, Story};
pub use user::{CreateUser, UpdateUser, User};
