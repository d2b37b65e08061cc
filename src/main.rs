use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use schema_collector::prelude::*;

#[derive(Parser)]
#[command(name = "schema_collector")]
#[command(about = "Collect GraphQL schema files into one directory, deduplicated by content hash", long_about = None)]
struct Cli {
    /// Directory to copy unique schema files into (created if missing)
    #[arg(env = "SCHEMA_COLLECTOR_DEST")]
    destination: PathBuf,

    /// Directory to search recursively for schema files
    #[arg(short, long, env = "SCHEMA_COLLECTOR_ROOT", default_value = "graph")]
    root: PathBuf,

    /// File-name suffix of schema files
    #[arg(short, long, default_value = SCHEMA_SUFFIX)]
    suffix: String,

    /// Skip existing destination files without re-hashing them
    #[arg(long)]
    no_verify: bool,

    /// Write a report of the collection pass to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write the report as JSON instead of text
    #[arg(long, requires = "report")]
    json: bool,

    /// Log every copied and skipped file
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CollectorConfig {
        search_root: cli.root,
        destination: cli.destination,
        suffix: cli.suffix,
        verify_existing: !cli.no_verify,
    };
    let collector = SchemaCollector::new(config);

    let outcome = collector.collect().with_context(|| {
        format!(
            "Failed to collect schemas from {}",
            collector.config().search_root.display()
        )
    })?;

    for path in &outcome.copied {
        println!("{}", path.display());
    }

    if let Some(report_path) = cli.report {
        let written = if cli.json {
            write_json_report(&report_path, collector.config(), &outcome)
        } else {
            write_report(&report_path, collector.config(), &outcome)
        };
        written.with_context(|| format!("Failed to write report to {}", report_path.display()))?;
        tracing::info!(report = %report_path.display(), "report written");
    }

    Ok(())
}
