//! Admin tool: add one dataset from a JSON file.
//!
//! Talks to the catalog file directly, not through the HTTP service.

use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use parcel_catalog::store::DEFAULT_DB_FILE;
use parcel_catalog::{cli, logging, version, CatalogError, CatalogStore, Dataset, Result};

/// Add a dataset to the catalog
#[derive(Parser, Debug)]
#[command(name = "admin_add_dataset")]
#[command(about = "Add a dataset described by a JSON file to the catalog")]
#[command(disable_version_flag = true)]
struct Args {
    /// JSON file describing the dataset
    path: Option<PathBuf>,

    /// SQLite file holding the catalog
    #[arg(long, default_value = DEFAULT_DB_FILE)]
    database: PathBuf,

    /// Print service version information
    #[arg(long)]
    version: bool,
}

fn main() {
    logging::init("info");

    let args = Args::parse_from(cli::normalize_args(&Args::command(), std::env::args_os()));

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.version {
        println!("{}", version::version_json()?);
        return Ok(());
    }

    let path = args
        .path
        .ok_or_else(|| CatalogError::Decode("Give a json file as an argument".to_string()))?;

    let bytes = fs::read(&path)?;
    let mut dataset = Dataset::parse(&bytes);

    let store = CatalogStore::new(args.database);
    store.ensure_schema()?;
    let id = store.insert(&mut dataset)?;

    tracing::info!("Added a new dataset '{}' (id {})", dataset.name, id);
    Ok(())
}
