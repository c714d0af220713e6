//! Application state - shared across all handlers.

use std::sync::Arc;

use contents_core::ports::PostRepository;
use contents_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "mysql")]
use contents_infra::{SeaOrmPostRepository, connect_and_bootstrap};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    #[cfg(feature = "mysql")]
    mysql: Option<Arc<SeaOrmPostRepository>>,
}

impl AppState {
    /// State over an arbitrary repository, without a database to tear down.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            #[cfg(feature = "mysql")]
            mysql: None,
        }
    }

    /// Build the application state with appropriate implementations.
    ///
    /// A configured database must be reachable and bootstrapped; only a missing
    /// configuration falls back to the in-memory store.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, String> {
        #[cfg(feature = "mysql")]
        let state = match db_config {
            Some(config) => {
                let db = connect_and_bootstrap(config)
                    .await
                    .map_err(|e| format!("Failed to initialize database: {e}"))?;
                let repo = Arc::new(SeaOrmPostRepository::new(db));
                Self {
                    posts: repo.clone(),
                    mysql: Some(repo),
                }
            }
            None => {
                tracing::warn!("DB_NAME not set. Running without database (in-memory mode).");
                Self::with_repository(Arc::new(InMemoryPostRepository::new()))
            }
        };

        #[cfg(not(feature = "mysql"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("Database configured but the mysql feature is disabled");
            }
            tracing::info!("Running without mysql feature - using in-memory repository");
            Self::with_repository(Arc::new(InMemoryPostRepository::new()))
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// Release storage resources once the server has stopped.
    pub async fn shutdown(&self) {
        #[cfg(feature = "mysql")]
        if let Some(repo) = &self.mysql {
            match repo.close().await {
                Ok(()) => tracing::info!("Database connections closed"),
                Err(e) => tracing::warn!("Failed to close database connections: {}", e),
            }
        }

        tracing::info!("Application state torn down");
    }
}
