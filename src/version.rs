//! Version metadata printed by `--version`.

use serde::Serialize;

use crate::error::Result;

/// Build information reported by every binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub package: &'static str,
    pub service_version: &'static str,
    pub rust_edition: &'static str,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            package: env!("CARGO_PKG_NAME"),
            service_version: crate::VERSION,
            rust_edition: "2021",
        }
    }
}

/// Version metadata as a JSON document
pub fn version_json() -> Result<String> {
    Ok(serde_json::to_string(&VersionInfo::current())?)
}
