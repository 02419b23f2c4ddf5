//! Story service - Static story listing behind the story latency.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::StoriesResponse;
use crate::errors::AppResult;
use crate::infra::{Latency, StoryRepository};

#[async_trait]
pub trait StoryService: Send + Sync {
    /// List all stories wrapped as `{ data: { stories } }`
    async fn list_stories(&self) -> AppResult<StoriesResponse>;
}

pub struct StoryFeed<R: StoryRepository> {
    repo: Arc<R>,
    latency: Latency,
}

impl<R: StoryRepository> StoryFeed<R> {
    pub fn new(repo: Arc<R>, latency: Latency) -> Self {
        Self { repo, latency }
    }
}

#[async_trait]
impl<R: StoryRepository> StoryService for StoryFeed<R> {
    async fn list_stories(&self) -> AppResult<StoriesResponse> {
        self.latency.elapse().await;

        let stories = self.repo.all().await?;
        Ok(StoriesResponse::from(stories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::StoryCatalog;
    use std::time::Duration;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_list_stories_after_delay() {
        let feed = StoryFeed::new(Arc::new(StoryCatalog::default()), Latency::from_millis(1000));
        let start = Instant::now();

        let response = feed.list_stories().await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1000));
        let titles: Vec<&str> = response.data.stories.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["React", "Redux"]);
    }

    #[tokio::test]
    async fn test_response_shape() {
        let feed = StoryFeed::new(Arc::new(StoryCatalog::default()), Latency::none());
        let json = serde_json::to_value(feed.list_stories().await.unwrap()).unwrap();

        assert_eq!(json["data"]["stories"][1]["author"], "Dan Abramov, Andrew Clark");
        assert_eq!(json["data"]["stories"][0]["objectID"], 0);
        assert_eq!(json["data"]["stories"][0]["num_comments"], 3);
    }
}
