//! In-memory post repository, for running without a database and for tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use contents_core::domain::{NewPost, Post, PostId};
use contents_core::error::RepoError;
use contents_core::ports::PostRepository;

#[derive(Default)]
struct Store {
    posts: BTreeMap<PostId, Post>,
    last_id: PostId,
}

/// Process-local post store. Ids start at 1 and are never reused.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn insert(&self, fields: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Query("post id space exhausted".to_string()))?;
        store.last_id = id;

        let post = Post::from_new(id, fields, Utc::now());
        store.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: PostId, fields: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.posts.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.replace_fields(fields);
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.posts.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
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

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryPostRepository::new();
        let before = Utc::now();

        let first = repo.insert(fields("one")).await.unwrap();
        let second = repo.insert(fields("two")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.created_at >= before);
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(fields("one")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.insert(fields("two")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let repo = InMemoryPostRepository::new();
        let created = repo.insert(fields("one")).await.unwrap();

        let updated = repo.update(created.id, fields("two")).await.unwrap();

        assert_eq!(updated.title, "two");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let repo = InMemoryPostRepository::new();
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
        assert!(matches!(
            repo.update(42, fields("x")).await,
            Err(RepoError::NotFound)
        ));
        assert!(matches!(repo.delete(42).await, Err(RepoError::NotFound)));
    }
}
