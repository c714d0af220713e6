//! # Contents API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    // Storage is ready (table bootstrapped) before any traffic is accepted
    let state = AppState::new(config.database.as_ref())
        .await
        .map_err(std::io::Error::other)?;

    tracing::info!(
        "Starting Contents API Server on {}:{}",
        config.host,
        config.port
    );

    let server_state = state.clone();
    let max_body_bytes = config.max_body_bytes;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(server_state.clone()))
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    state.shutdown().await;
    Ok(())
}
