//! Catalog Store
//!
//! Per-call SQLite access for the dataset table.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};

use crate::dataset::{Dataset, Tags};
use crate::error::{CatalogError, Result};

use super::schema::{CREATE_TABLE_SQL, INSERT_SQL, SELECT_ALL_SQL};

/// Handle on the backing SQLite file
///
/// Holds only the path. Each operation acquires a connection scoped to the
/// call, so the handle is cheap to clone and share across threads.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Create a store handle for the given file (not opened yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file and table if the file does not exist yet.
    ///
    /// An existing file is left untouched, whatever it contains.
    /// Returns true when the table was created by this call.
    pub fn ensure_schema(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        tracing::info!(path = %self.path.display(), "Catalog file not found, creating it");

        let created = self
            .open()
            .and_then(|conn| conn.execute_batch(CREATE_TABLE_SQL).map_err(CatalogError::from));

        if let Err(e) = created {
            // Don't leave a tableless file behind; later calls would skip creation
            let _ = fs::remove_file(&self.path);
            return Err(CatalogError::StorageSetup(format!(
                "failed to create '{}': {}",
                self.path.display(),
                e
            )));
        }

        tracing::info!("Created 'dataset' table");
        Ok(true)
    }

    /// Insert a dataset and return its assigned id.
    ///
    /// The id is also written back into `dataset`. Any id the caller set
    /// beforehand is ignored.
    pub fn insert(&self, dataset: &mut Dataset) -> Result<i64> {
        let conn = self.open()?;
        let tags = serde_json::to_string(&dataset.tags)?;

        conn.execute(
            INSERT_SQL,
            params![
                dataset.name,
                dataset.creator,
                dataset.description,
                dataset.url,
                dataset.host,
                dataset.rights,
                tags,
            ],
        )?;

        let id = conn.last_insert_rowid();
        dataset.id = id;

        tracing::debug!(id, name = %dataset.name, "Inserted dataset");
        Ok(id)
    }

    /// Read every stored dataset in the order SQLite returns them.
    ///
    /// A scalar column that cannot be read fails the whole listing. A
    /// malformed tag blob only empties that row's tags.
    pub fn list_all(&self) -> Result<Vec<Dataset>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(SELECT_ALL_SQL)?;

        let rows = stmt.query_map([], read_row)?;

        let mut datasets = Vec::new();
        for row in rows {
            datasets.push(row?);
        }

        tracing::debug!(count = datasets.len(), "Listed datasets");
        Ok(datasets)
    }

    fn open(&self) -> Result<Connection> {
        tracing::trace!(path = %self.path.display(), "Opening catalog connection");
        Ok(Connection::open(&self.path)?)
    }
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<Dataset> {
    let id: i64 = row.get(0)?;
    let text = |idx: usize| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
    };

    // Older writers stored the tag document as a BLOB, so accept both
    let blob = match row.get_ref(7)? {
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    };

    Ok(Dataset {
        id,
        name: text(1)?,
        creator: text(2)?,
        description: text(3)?,
        url: text(4)?,
        host: text(5)?,
        rights: text(6)?,
        tags: decode_tags(id, blob.as_deref()),
    })
}

/// Decode a stored tag document; absent, empty, `null` or malformed all
/// yield an empty mapping.
fn decode_tags(id: i64, blob: Option<&str>) -> Tags {
    let blob = match blob {
        Some(b) if !b.trim().is_empty() => b,
        _ => return Tags::new(),
    };

    match serde_json::from_str::<Option<Tags>>(blob) {
        Ok(tags) => tags.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(id, error = %e, "Ignoring malformed tags");
            Tags::new()
        }
    }
}
