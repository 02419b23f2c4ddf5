//! Story records served as a static, read-only secondary dataset.

use serde::{Deserialize, Serialize};

/// A single story entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: u32,
    #[serde(rename = "objectID")]
    pub object_id: u64,
}

/// Nested response shape: `{ data: { stories: [...] } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoriesResponse {
    pub data: StoriesData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoriesData {
    pub stories: Vec<Story>,
}

impl From<Vec<Story>> for StoriesResponse {
    fn from(stories: Vec<Story>) -> Self {
        Self {
            data: StoriesData { stories },
        }
    }
}
