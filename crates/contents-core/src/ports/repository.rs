use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Post storage - single-row CRUD over the posts table.
///
/// Every mutating call has committed by the time it returns.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every stored post, in ascending id order.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Persist a new post. Storage assigns `id` and `created_at`.
    async fn insert(&self, fields: NewPost) -> Result<Post, RepoError>;

    /// Overwrite every mutable field of an existing post.
    ///
    /// Returns [`RepoError::NotFound`] when no post has this id.
    async fn update(&self, id: PostId, fields: NewPost) -> Result<Post, RepoError>;

    /// Hard-delete a post.
    ///
    /// Returns [`RepoError::NotFound`] when no post has this id.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;
}
