//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over the in-memory data,
//! following the Repository pattern for clean separation of concerns.

mod story_repository;
mod user_repository;

pub use story_repository::{StoryCatalog, StoryRepository};
pub use user_repository::{seed_users, UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
