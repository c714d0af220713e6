use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Primary key of a stored post.
pub type PostId = i32;

/// Post entity - one social media content record as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub platform: String,
    pub title: String,
    pub tone: String,
    pub content: String,
    pub hashtags: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The client-supplied fields of a post, used for both create and update.
///
/// Always validated: build one through [`crate::validate_post_input`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub platform: String,
    pub title: String,
    pub tone: String,
    pub content: String,
    pub hashtags: String,
    pub link: Option<String>,
}

impl Post {
    /// Materialize a stored post from validated fields and storage-assigned values.
    pub fn from_new(id: PostId, fields: NewPost, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            platform: fields.platform,
            title: fields.title,
            tone: fields.tone,
            content: fields.content,
            hashtags: fields.hashtags,
            link: fields.link,
            created_at,
        }
    }

    /// Replace every mutable field. `id` and `created_at` are left alone.
    pub fn replace_fields(&mut self, fields: NewPost) {
        self.platform = fields.platform;
        self.title = fields.title;
        self.tone = fields.tone;
        self.content = fields.content;
        self.hashtags = fields.hashtags;
        self.link = fields.link;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str) -> NewPost {
        NewPost {
            platform: "x".to_string(),
            title: title.to_string(),
            tone: "casual".to_string(),
            content: "body".to_string(),
            hashtags: "#a".to_string(),
            link: None,
        }
    }

    #[test]
    fn replace_fields_keeps_identity_and_timestamp() {
        let created_at = Utc::now();
        let mut post = Post::from_new(7, fields("first"), created_at);

        let mut update = fields("second");
        update.link = Some("https://example.com".to_string());
        post.replace_fields(update);

        assert_eq!(post.id, 7);
        assert_eq!(post.created_at, created_at);
        assert_eq!(post.title, "second");
        assert_eq!(post.link.as_deref(), Some("https://example.com"));
    }
}
