//! Configuration for the catalog service
//!
//! Built once at startup from command-line flags and handed to the
//! service by value.

use std::path::PathBuf;

/// Main configuration for a catalog service instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Host part of the listen address; empty means all interfaces
    pub address: String,

    /// TCP port to listen on
    pub port: u16,

    /// Path prefix every route is mounted under
    pub request_root: String,

    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// SQLite file holding the dataset table, relative to the working directory
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: String::new(),
            port: 80,
            request_root: "/".to_string(),
            database_path: PathBuf::from(crate::store::DEFAULT_DB_FILE),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Composed `host:port` listen address
    ///
    /// An empty host binds every interface.
    pub fn service_address(&self) -> String {
        let host = if self.address.is_empty() {
            "0.0.0.0"
        } else {
            self.address.as_str()
        };
        format!("{}:{}", host, self.port)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the listen host
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.config.address = address.into();
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the request root every route is joined onto
    pub fn request_root(mut self, root: impl Into<String>) -> Self {
        self.config.request_root = root.into();
        self
    }

    /// Set the backing SQLite file
    pub fn database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.database_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
