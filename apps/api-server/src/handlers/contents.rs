//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use contents_core::domain::PostId;
use contents_core::validate_post_input;
use contents_shared::{DetailResponse, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/contents
pub async fn list_contents(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;

    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/contents/{id}
pub async fn get_content(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /api/contents
///
/// The body is read raw so it is parsed as JSON whatever the content type.
pub async fn create_content(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let fields = validate_post_input(&body)?;

    let post = state.posts.insert(fields).await?;
    tracing::info!(post_id = post.id, platform = %post.platform, "Post created");

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /api/contents/{id}
///
/// Replaces every mutable field. The body is validated before the id is looked up.
pub async fn update_content(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let fields = validate_post_input(&body)?;

    let post = state.posts.update(id, fields).await?;
    tracing::info!(post_id = id, "Post updated");

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// DELETE /api/contents/{id}
pub async fn delete_content(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;
    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::Ok().json(DetailResponse::deleted()))
}
