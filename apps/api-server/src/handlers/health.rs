//! Health check endpoint.

use actix_web::HttpResponse;
use contents_shared::HealthResponse;

/// Health check endpoint - returns server status.
///
/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}
