//! Dataset Module
//!
//! The in-memory shape of one catalog entry.
//!
//! ## Exchange Format
//! A single JSON object, used for CLI input files, CLI listing output and
//! HTTP response bodies alike:
//!
//! ```text
//! {
//!   "id": 1,
//!   "name": "Soil Moisture",
//!   "creator": "Lab X",
//!   "description": "...",
//!   "url": "irods://example/data",
//!   "host": "CyVerse",
//!   "rights": "CC-BY",
//!   "tags": { "doi": "10.1/x" }
//! }
//! ```
//!
//! Tags carry extensible metadata such as citation text, a DOI or the
//! publication year.

mod record;
mod search;
mod display;

pub use record::{Dataset, Tags};
pub use display::{render, DisplayMode, DEFAULT_SUMMARY_DESCRIPTION_LEN};
