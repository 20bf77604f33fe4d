//! Admin tool: list every dataset in the catalog.
//!
//! Datasets go to stdout, logs to stderr.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use parcel_catalog::dataset::{render, DisplayMode, DEFAULT_SUMMARY_DESCRIPTION_LEN};
use parcel_catalog::store::DEFAULT_DB_FILE;
use parcel_catalog::{cli, logging, version, CatalogStore, Result};

/// Output format for each dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One exchange-format JSON document per line
    Json,
    /// Name, creator, rights and a shortened description
    Summary,
    /// Every field and tag
    Detail,
}

/// List datasets in the catalog
#[derive(Parser, Debug)]
#[command(name = "admin_list_datasets")]
#[command(about = "List every dataset in the catalog")]
#[command(disable_version_flag = true)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Only show datasets matching any of these keywords (repeatable)
    #[arg(short, long = "keyword")]
    keywords: Vec<String>,

    /// Description length kept in summary output
    #[arg(long, default_value_t = DEFAULT_SUMMARY_DESCRIPTION_LEN)]
    max_description: usize,

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

    let store = CatalogStore::new(args.database);
    store.ensure_schema()?;
    let datasets = store.list_all()?;

    let mut count = 0;
    for dataset in datasets
        .iter()
        .filter(|ds| args.keywords.is_empty() || ds.matches_keywords(&args.keywords))
    {
        match args.format {
            Format::Json => println!("{}", dataset.format()?),
            Format::Summary => print!(
                "{}",
                render(
                    dataset,
                    DisplayMode::Summary {
                        max_description_len: args.max_description
                    }
                )
            ),
            Format::Detail => print!("{}", render(dataset, DisplayMode::Detail)),
        }
        count += 1;
    }

    tracing::info!("Displayed {} datasets", count);
    Ok(())
}
