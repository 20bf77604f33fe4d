//! Store Module
//!
//! Durable persistence of datasets in a single SQLite file.
//!
//! ## Responsibilities
//! - Create the backing file and `dataset` table on first use
//! - Insert one dataset and report the assigned id
//! - List every stored dataset
//!
//! ## Table Layout
//! ```text
//! ┌────┬──────┬─────────┬─────────────┬─────┬──────┬────────┬──────┐
//! │ id │ name │ creator │ description │ url │ host │ rights │ tags │
//! └────┴──────┴─────────┴─────────────┴─────┴──────┴────────┴──────┘
//!   │                                                          │
//!   AUTOINCREMENT primary key                     JSON object text
//! ```
//!
//! ## Connections
//! Every operation opens its own connection and drops it before
//! returning. Concurrent writers are serialized by SQLite's file lock.

mod schema;
mod catalog;

pub use schema::{CREATE_TABLE_SQL, DEFAULT_DB_FILE};
pub use catalog::CatalogStore;
