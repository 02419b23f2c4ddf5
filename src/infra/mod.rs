//! Infrastructure layer - Storage and timing
//!
//! This module handles the concerns a real backend would own:
//! - In-memory user store and the static story catalog
//! - Artificial latency and request cancellation

pub mod latency;
pub mod repositories;

pub use latency::{cancellable, Latency};
pub use repositories::{StoryCatalog, StoryRepository, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
