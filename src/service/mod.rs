//! Service Module
//!
//! HTTP read access to the catalog.
//!
//! ## Routes
//! - `GET {root}`          - plain-text banner
//! - `GET {root}/datasets` - JSON array of every dataset, `500` with the
//!   error text on store failure
//!
//! ## Lifecycle
//! ```text
//! CatalogService::new ──► run(self) ──► returns
//!      Created             Running       Stopped
//! ```
//! `run` consumes the service and only returns when the listener fails or
//! closes. There is no shutdown signal handling.
//!
//! ## Architecture
//! - axum router on the tokio multi-threaded runtime
//! - Store calls are blocking and run on the blocking pool

mod server;
mod handlers;
mod paths;

pub use server::CatalogService;
pub use handlers::BANNER;
pub use paths::{make_request_path, validate_request_root};
