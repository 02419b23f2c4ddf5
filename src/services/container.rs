//! Service Container - Owns the store and the services built on it.
//!
//! The container is created once at process start and shut down at
//! process end; it replaces any module-level store singleton.

use std::sync::Arc;

use super::{StoryFeed, StoryService, UserManager, UserService};
use crate::config::Config;
use crate::infra::{Latency, StoryCatalog, UserStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get story service
    fn stories(&self) -> Arc<dyn StoryService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    store: Arc<UserStore>,
    user_service: Arc<dyn UserService>,
    story_service: Arc<dyn StoryService>,
}

impl Services {
    /// Create a service container over an existing store
    pub fn new(store: Arc<UserStore>, config: &Config) -> Self {
        let user_service: Arc<dyn UserService> = Arc::new(UserManager::new(
            store.clone(),
            Latency::new(config.user_latency),
        ));
        let story_service: Arc<dyn StoryService> = Arc::new(StoryFeed::new(
            Arc::new(StoryCatalog::default()),
            Latency::new(config.story_latency),
        ));

        Self {
            store,
            user_service,
            story_service,
        }
    }

    /// Create service container with a fresh store
    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed_users {
            UserStore::seeded()
        } else {
            UserStore::new()
        };
        tracing::debug!(?config, "Service container created");

        Self::new(Arc::new(store), config)
    }

    /// Direct access to the backing store
    pub fn store(&self) -> Arc<UserStore> {
        self.store.clone()
    }

    /// Tear the store down; later user calls fail with "Users not found".
    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn stories(&self) -> Arc<dyn StoryService> {
        self.story_service.clone()
    }
}
