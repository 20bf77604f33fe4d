//! Parcel Catalog Service Binary
//!
//! Starts the HTTP service for the dataset catalog.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use parcel_catalog::store::DEFAULT_DB_FILE;
use parcel_catalog::{cli, logging, version, CatalogService, CatalogStore, Config};

/// Parcel Catalog Service
#[derive(Parser, Debug)]
#[command(name = "parcel-catalog-service")]
#[command(about = "HTTP catalog of dataset metadata")]
#[command(disable_version_flag = true)]
struct Args {
    /// Service address (empty binds every interface)
    #[arg(long, default_value = "")]
    address: String,

    /// Service port number
    #[arg(long, default_value_t = 80)]
    port: u16,

    /// Service request root dir
    #[arg(long = "requestRoot", visible_alias = "request-root", default_value = "/")]
    request_root: String,

    /// SQLite file holding the catalog
    #[arg(long, default_value = DEFAULT_DB_FILE)]
    database: PathBuf,

    /// Print service version information
    #[arg(long)]
    version: bool,
}

#[tokio::main]
async fn main() {
    logging::init("info,parcel_catalog=debug");

    let args = Args::parse_from(cli::normalize_args(&Args::command(), std::env::args_os()));

    if args.version {
        match version::version_json() {
            Ok(info) => println!("{}", info),
            Err(e) => {
                tracing::error!("Failed to encode version info: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    tracing::info!("Parcel Catalog Service v{}", parcel_catalog::VERSION);

    let config = Config::builder()
        .address(args.address)
        .port(args.port)
        .request_root(args.request_root)
        .database_path(args.database)
        .build();

    let service = match CatalogService::new(config) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let config = service.config();
    tracing::info!("Catalog file: {}", config.database_path.display());
    tracing::info!("Request root: {}", config.request_root);

    // Requests create the table lazily too, so a failure here is not fatal
    let store = CatalogStore::new(&config.database_path);
    if let Err(e) = store.ensure_schema() {
        tracing::warn!("Could not prepare catalog at startup: {}", e);
    }

    if let Err(e) = service.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
