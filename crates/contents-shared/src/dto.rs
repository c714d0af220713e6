//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use contents_core::domain::Post;

/// Output schema of a post. Every endpoint that returns a post uses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub platform: String,
    pub title: String,
    pub tone: String,
    pub content: String,
    pub hashtags: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            platform: post.platform,
            title: post.title,
            tone: post.tone,
            content: post.content,
            hashtags: post.hashtags,
            link: post.link,
            created_at: post.created_at,
        }
    }
}
