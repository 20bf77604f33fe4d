//! Route path composition

use crate::error::{CatalogError, Result};

/// Join a request root and a sub-path with exactly one slash between them
///
/// `("/api/", "/datasets")` and `("/api", "datasets")` both give
/// `/api/datasets`.
pub fn make_request_path(request_root: &str, path: &str) -> String {
    format!(
        "{}/{}",
        request_root.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Router paths must be absolute
pub(crate) fn route_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Reject request roots the router would read as captures (`:name`, `*rest`)
pub fn validate_request_root(request_root: &str) -> Result<()> {
    if request_root.contains(|c| c == ':' || c == '*') {
        return Err(CatalogError::Config(format!(
            "request root '{}' must not contain ':' or '*'",
            request_root
        )));
    }
    Ok(())
}
