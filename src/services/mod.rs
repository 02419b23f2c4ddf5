//! Application services layer - The mock API.
//!
//! Services wrap the repositories with artificial latency and the
//! presence validation a backend would perform. They depend on
//! repository traits for dependency inversion.

pub mod container;
mod story_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use story_service::{StoryFeed, StoryService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
