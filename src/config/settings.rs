//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_STORY_LATENCY_MS, DEFAULT_USER_LATENCY_MS, ENV_SEED_USERS, ENV_STORY_LATENCY_MS,
    ENV_USER_LATENCY_MS,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Delay before any user operation settles
    pub user_latency: Duration,
    /// Delay before the story listing settles
    pub story_latency: Duration,
    /// Start the store with the demo users
    pub seed_users: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_latency: Duration::from_millis(DEFAULT_USER_LATENCY_MS),
            story_latency: Duration::from_millis(DEFAULT_STORY_LATENCY_MS),
            seed_users: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            user_latency: Duration::from_millis(
                env::var(ENV_USER_LATENCY_MS)
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_USER_LATENCY_MS),
            ),
            story_latency: Duration::from_millis(
                env::var(ENV_STORY_LATENCY_MS)
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_STORY_LATENCY_MS),
            ),
            seed_users: env::var(ENV_SEED_USERS)
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Drop all artificial latency.
    pub fn instant(mut self) -> Self {
        self.user_latency = Duration::ZERO;
        self.story_latency = Duration::ZERO;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
