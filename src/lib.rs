//! # Parcel Catalog
//!
//! A minimal dataset catalog:
//! - Dataset metadata records with a JSON exchange format
//! - A single-table SQLite store
//! - A read-only HTTP API
//! - Admin command-line tools for adding and listing datasets
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐   ┌──────────────────────────────────┐
//! │     HTTP Service     │   │            Admin CLIs            │
//! │  GET {root}          │   │ admin_add_dataset <file.json>    │
//! │  GET {root}/datasets │   │ admin_list_datasets              │
//! └──────────┬───────────┘   └────────────────┬─────────────────┘
//!            │                                │
//!            └───────────────┬────────────────┘
//!                            ▼
//!                   ┌─────────────────┐
//!                   │  Catalog Store  │
//!                   │    (SQLite)     │
//!                   └────────┬────────┘
//!                            ▼
//!                   ┌─────────────────┐
//!                   │     Dataset     │
//!                   │ (record + JSON) │
//!                   └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod cli;
pub mod logging;
pub mod version;

pub mod dataset;
pub mod store;
pub mod service;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CatalogError, Result};
pub use config::Config;
pub use dataset::Dataset;
pub use store::CatalogStore;
pub use service::CatalogService;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the catalog service
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
