//! Report writing functionality

use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::collector::{CollectOutcome, CollectorConfig, SkippedFile};

/// Serializable summary of one collection pass
#[derive(Debug, Serialize)]
pub struct CollectReport<'a> {
    pub search_root: &'a Path,
    pub destination: &'a Path,
    pub suffix: &'a str,
    pub copied: &'a [PathBuf],
    pub skipped: &'a [SkippedFile],
}

impl<'a> CollectReport<'a> {
    pub fn new(config: &'a CollectorConfig, outcome: &'a CollectOutcome) -> Self {
        Self {
            search_root: &config.search_root,
            destination: &config.destination,
            suffix: &config.suffix,
            copied: &outcome.copied,
            skipped: &outcome.skipped,
        }
    }
}

/// Write a human-readable collection report
///
/// # Arguments
/// * `output_path` - Path to output file
/// * `config` - Settings the pass ran with
/// * `outcome` - Result of the pass
pub fn write_report(output_path: &Path, config: &CollectorConfig, outcome: &CollectOutcome) -> Result<()> {
    let mut file = BufWriter::new(File::create(output_path)?);

    writeln!(file, "Schema Collection Report")?;
    writeln!(file, "========================")?;
    writeln!(file, "Search root: {}", config.search_root.display())?;
    writeln!(file, "Destination: {}", config.destination.display())?;
    writeln!(file)?;

    writeln!(file, "Summary Statistics:")?;
    writeln!(file, "-------------------")?;
    writeln!(
        file,
        "  Schema files found: {}",
        outcome.copied.len() + outcome.skipped.len()
    )?;
    writeln!(file, "  Newly copied: {}", outcome.copied.len())?;
    writeln!(file, "  Already collected: {}", outcome.skipped.len())?;
    writeln!(file)?;

    if !outcome.copied.is_empty() {
        writeln!(file, "Copied Files:")?;
        writeln!(file, "-------------")?;
        for path in &outcome.copied {
            writeln!(file, "  {}", path.display())?;
        }
        writeln!(file)?;
    }

    if !outcome.skipped.is_empty() {
        writeln!(file, "Skipped Files:")?;
        writeln!(file, "--------------")?;
        for skipped in &outcome.skipped {
            writeln!(
                file,
                "  {} -> {}",
                skipped.source.display(),
                skipped.destination.display()
            )?;
        }
    }

    file.flush()?;
    Ok(())
}

/// Write the collection report as pretty-printed JSON
pub fn write_json_report(output_path: &Path, config: &CollectorConfig, outcome: &CollectOutcome) -> Result<()> {
    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, &CollectReport::new(config, outcome))?;
    Ok(())
}
