//! HTTP Server
//!
//! Binds the router to the configured address and serves until the
//! listener fails.

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::store::CatalogStore;

use super::handlers::{self, AppState};
use super::paths::{make_request_path, route_path, validate_request_root};

/// HTTP service for the catalog
pub struct CatalogService {
    config: Config,
    router: Router,
}

impl CatalogService {
    /// Build the router and bind handlers; nothing is opened yet
    ///
    /// Fails when the request root cannot be mounted.
    pub fn new(config: Config) -> Result<Self> {
        validate_request_root(&config.request_root)?;

        let state = AppState {
            store: CatalogStore::new(&config.database_path),
        };

        let root = route_path(&config.request_root);
        let datasets = route_path(&make_request_path(&config.request_root, "/datasets"));
        tracing::debug!(%root, %datasets, "Registering routes");

        let router = Router::new()
            .route(&root, get(handlers::root))
            .route(&datasets, get(handlers::list_datasets))
            .with_state(state);

        Ok(Self { config, router })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The composed router, for serving in-process
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve requests until the listener terminates (blocking)
    ///
    /// A bind failure, such as the port already being in use, is returned
    /// immediately.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.service_address();
        let listener = TcpListener::bind(addr.as_str())
            .await
            .map_err(|e| CatalogError::Network(format!("failed to bind {}: {}", addr, e)))?;

        tracing::info!("Listening for connections on address: {}", addr);
        let served = axum::serve(listener, self.router).await;
        tracing::info!("Stopped listening for connections on address: {}", addr);

        served.map_err(|e| CatalogError::Network(e.to_string()))
    }
}
