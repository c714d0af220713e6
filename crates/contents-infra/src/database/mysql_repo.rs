//! MySQL repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};

use contents_core::domain::{NewPost, Post, PostId};
use contents_core::error::RepoError;
use contents_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// SeaORM-backed post repository.
pub struct SeaOrmPostRepository {
    db: DbConn,
}

impl SeaOrmPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Close the underlying connection pool.
    pub async fn close(&self) -> Result<(), RepoError> {
        self.db.close_by_ref().await.map_err(query_error)
    }
}

fn query_error(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        _ => RepoError::Query(e.to_string()),
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, fields: NewPost) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = fields.into();
        // MySQL has no RETURNING, so SeaORM re-reads the row by its new id.
        let model = active_model.insert(&self.db).await.map_err(query_error)?;

        tracing::debug!(post_id = model.id, "Post inserted");
        Ok(model.into())
    }

    async fn update(&self, id: PostId, fields: NewPost) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = fields.into();

        // MySQL reports zero affected rows when nothing changed, so existence
        // is decided by the read-back, not by the update result.
        PostEntity::update_many()
            .set(active_model)
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?
            .ok_or(RepoError::NotFound)?;

        tracing::debug!(post_id = id, "Post updated");
        Ok(model.into())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = id, "Post deleted");
        Ok(())
    }
}
