//! Static story catalog.

use async_trait::async_trait;

use crate::domain::Story;
use crate::errors::AppResult;

/// Read-only story source
#[async_trait]
pub trait StoryRepository: Send + Sync {
    async fn all(&self) -> AppResult<Vec<Story>>;
}

/// Fixed in-memory story list; never mutated.
#[derive(Debug, Clone)]
pub struct StoryCatalog {
    stories: Vec<Story>,
}

impl StoryCatalog {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }
}

impl Default for StoryCatalog {
    fn default() -> Self {
        Self::new(vec![
            Story {
                title: "React".to_string(),
                url: "https://reactjs.org/".to_string(),
                author: "Jordan Walke".to_string(),
                num_comments: 3,
                points: 4,
                object_id: 0,
            },
            Story {
                title: "Redux".to_string(),
                url: "https://redux.js.org/".to_string(),
                author: "Dan Abramov, Andrew Clark".to_string(),
                num_comments: 2,
                points: 5,
                object_id: 1,
            },
        ])
    }
}

#[async_trait]
impl StoryRepository for StoryCatalog {
    async fn all(&self) -> AppResult<Vec<Story>> {
        Ok(self.stories.clone())
    }
}
