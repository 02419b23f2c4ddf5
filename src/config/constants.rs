//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Latency
// =============================================================================

/// Default artificial delay for user operations in milliseconds
pub const DEFAULT_USER_LATENCY_MS: u64 = 250;

/// Default artificial delay for the story listing in milliseconds
pub const DEFAULT_STORY_LATENCY_MS: u64 = 1000;

// =============================================================================
// Environment
// =============================================================================

pub const ENV_USER_LATENCY_MS: &str = "USER_LATENCY_MS";

pub const ENV_STORY_LATENCY_MS: &str = "STORY_LATENCY_MS";

/// Whether the store starts with the two demo users
pub const ENV_SEED_USERS: &str = "SEED_USERS";

// =============================================================================
// Error messages
// =============================================================================

/// Referenced user identifier is absent
pub const MSG_USER_NOT_FOUND: &str = "User not found";

/// The user collection itself is absent (store shut down)
pub const MSG_USERS_NOT_FOUND: &str = "Users not found";

/// Create payload lacks a first or last name
pub const MSG_MISSING_INFORMATION: &str = "Not all information provided";

// =============================================================================
// Rendering
// =============================================================================

pub const DEVELOPER_TEXT: &str = "is a developer";

pub const NON_DEVELOPER_TEXT: &str = "is not a developer";
