//! HTTP handlers and route configuration.

mod contents;
mod health;


use actix_web::{HttpResponse, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
///
/// Item routes only match decimal ids; any other segment, like any unknown
/// path, falls through to the JSON not-found response.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        // Digit-only ids that overflow the id type.
        tracing::debug!("Unmatched path id: {}", err);
        AppError::NotFound.into()
    }))
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/api/contents")
            .service(
                web::resource("")
                    .route(web::get().to(contents::list_contents))
                    .route(web::post().to(contents::create_content)),
            )
            .service(
                web::resource("/{id:\\d+}")
                    .route(web::get().to(contents::get_content))
                    .route(web::put().to(contents::update_content))
                    .route(web::delete().to(contents::delete_content)),
            ),
    )
    .default_service(web::to(not_found));
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}
