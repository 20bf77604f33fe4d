//! Error types for the catalog
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Unified error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Storage setup failed: {0}")]
    StorageSetup(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// True for failures of the backing store (open, prepare, execute, scan)
    pub fn is_storage(&self) -> bool {
        matches!(self, CatalogError::Storage(_) | CatalogError::StorageSetup(_))
    }

    /// The underlying error text, without the category prefix
    pub fn message(&self) -> String {
        match self {
            CatalogError::Io(e) => e.to_string(),
            CatalogError::Json(e) => e.to_string(),
            CatalogError::Storage(e) => e.to_string(),
            CatalogError::Decode(msg)
            | CatalogError::StorageSetup(msg)
            | CatalogError::Network(msg)
            | CatalogError::Config(msg) => msg.clone(),
        }
    }
}
