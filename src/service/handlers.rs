//! Request handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::store::CatalogStore;

/// Body of the root route
pub const BANNER: &str = "Parcel-Catalog-Service Root Page\n";

/// State shared by every handler
#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) store: CatalogStore,
}

pub(crate) async fn root() -> &'static str {
    BANNER
}

/// List every dataset, creating an empty catalog first if needed
pub(crate) async fn list_datasets(State(state): State<AppState>) -> Response {
    let store = state.store.clone();
    let listed = tokio::task::spawn_blocking(move || -> Result<Vec<Dataset>> {
        store.ensure_schema()?;
        store.list_all()
    })
    .await;

    match listed {
        Ok(Ok(datasets)) => {
            tracing::debug!(count = datasets.len(), "Serving dataset listing");
            Json(datasets).into_response()
        }
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Dataset listing failed");
            internal_error(e.message())
        }
        Err(e) => {
            tracing::error!(error = %e, "Dataset listing task failed");
            internal_error(format!("listing task failed: {}", e))
        }
    }
}

fn internal_error(message: String) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}
