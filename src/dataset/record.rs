//! Dataset record and exchange-format conversions

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Free-form string metadata attached to a dataset
pub type Tags = BTreeMap<String, String>;

/// One catalog entry
///
/// `id` is zero until the store assigns one on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub id: i64,
    /// May contain whitespace
    pub name: String,
    pub creator: String,
    pub description: String,
    /// Locator of the actual content, e.g. `irods://...` or `https://...`
    pub url: String,
    /// Hosting organization, e.g. `CyVerse`
    pub host: String,
    pub rights: String,
    pub tags: Tags,
}

impl Dataset {
    /// Best-effort decode of one exchange-format document.
    ///
    /// Never fails. Fields that are missing or have the wrong JSON type keep
    /// their defaults, and input that is not JSON at all yields an empty
    /// dataset. The admin tools rely on this partial success.
    pub fn parse(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                tracing::warn!(error = %e, "Dataset document is not valid JSON, using defaults");
                Self::default()
            }
        }
    }

    /// Best-effort decode of a JSON array of documents.
    ///
    /// A document that is not an array decodes to an empty list.
    pub fn parse_list(bytes: &[u8]) -> Vec<Self> {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Array(items)) => items.iter().map(Self::from_value).collect(),
            Ok(_) => {
                tracing::warn!("Dataset list document is not an array");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dataset list document is not valid JSON");
                Vec::new()
            }
        }
    }

    /// Encode into the exchange format
    pub fn format(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            tracing::warn!("Dataset document is not a JSON object, using defaults");
            return Self::default();
        };

        let text = |key: &str| -> String {
            fields
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_default()
        };

        // Non-string tag values are dropped rather than failing the whole map
        let tags = fields
            .get("tags")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_owned())))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: fields.get("id").and_then(Value::as_i64).unwrap_or_default(),
            name: text("name"),
            creator: text("creator"),
            description: text("description"),
            url: text("url"),
            host: text("host"),
            rights: text("rights"),
            tags,
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.format().map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}
