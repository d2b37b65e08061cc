//! Schema collection: walk, hash, name, copy

use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::{CollectError, Result};
use super::naming::destination_file_name;
use crate::scanner::content_hash::{compute_file_hash, ContentHash};
use crate::scanner::file_scanner::{SchemaFiles, SCHEMA_SUFFIX};

/// Settings for one collection pass
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Directory the walk starts from
    pub search_root: PathBuf,
    /// Directory unique schema files are copied into
    pub destination: PathBuf,
    /// File-name suffix of files to collect
    pub suffix: String,
    /// Re-hash an existing destination file before skipping it and fail if
    /// its content differs from the source
    pub verify_existing: bool,
}

impl CollectorConfig {
    pub fn new(search_root: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            search_root: search_root.into(),
            destination: destination.into(),
            suffix: SCHEMA_SUFFIX.to_string(),
            verify_existing: true,
        }
    }
}

/// A source file whose destination entry was already present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Result of one collection pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectOutcome {
    /// Destination paths written by this pass, in walk order
    pub copied: Vec<PathBuf>,
    /// Sources left alone because their destination already existed
    pub skipped: Vec<SkippedFile>,
}

/// Gathers schema files from a search root into a destination directory
pub struct SchemaCollector {
    config: CollectorConfig,
}

impl SchemaCollector {
    pub fn new(config: CollectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Run a single pass over the search root
    ///
    /// Stops at the first error. Files copied before it stay on disk.
    pub fn collect(&self) -> Result<CollectOutcome> {
        let root = resolve_search_root(&self.config.search_root)?;
        let destination = &self.config.destination;

        fs::create_dir_all(destination).map_err(|source| CollectError::DestinationDir {
            path: destination.clone(),
            source,
        })?;
        // Matches the canonical paths the walker yields below `root`
        let exclude = fs::canonicalize(destination).map_err(|source| CollectError::DestinationDir {
            path: destination.clone(),
            source,
        })?;

        debug!(root = %root.display(), destination = %destination.display(), "collecting schemas");

        let mut outcome = CollectOutcome::default();
        for source in SchemaFiles::new(&root, Some(&exclude), &self.config.suffix) {
            let source = source?;
            let hash = compute_file_hash(&source)?;
            let target = destination.join(destination_file_name(file_name(&source)?, &hash));

            if target.exists() {
                if self.config.verify_existing {
                    verify_existing(&target, &hash)?;
                }
                debug!(source = %source.display(), target = %target.display(), "already collected");
                outcome.skipped.push(SkippedFile {
                    source,
                    destination: target,
                });
                continue;
            }

            copy_file(&source, &target)?;
            debug!(source = %source.display(), target = %target.display(), "copied schema");
            outcome.copied.push(target);
        }

        info!(
            copied = outcome.copied.len(),
            skipped = outcome.skipped.len(),
            "schema collection complete"
        );
        Ok(outcome)
    }
}

/// Copy every schema file below `search_root` into `destination`
///
/// # Arguments
/// * `search_root` - Directory to search recursively
/// * `destination` - Output directory, created if missing
///
/// # Returns
/// Destination paths newly written by this call, in walk order
pub fn collect_schemas(search_root: &Path, destination: &Path) -> Result<Vec<PathBuf>> {
    let outcome = SchemaCollector::new(CollectorConfig::new(search_root, destination)).collect()?;
    Ok(outcome.copied)
}

fn resolve_search_root(path: &Path) -> Result<PathBuf> {
    let root = fs::canonicalize(path).map_err(|source| CollectError::RootResolution {
        path: path.to_path_buf(),
        source,
    })?;
    if !root.is_dir() {
        return Err(CollectError::RootNotDirectory(path.to_path_buf()));
    }
    Ok(root)
}

/// Base name of a source file, which must be valid UTF-8
fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CollectError::NonUtf8Name(path.to_path_buf()))
}

fn verify_existing(target: &Path, expected: &ContentHash) -> Result<()> {
    let actual = compute_file_hash(target)?;
    if &actual != expected {
        return Err(CollectError::ContentMismatch {
            path: target.to_path_buf(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

/// Stream `source` into a newly created `target`
///
/// `target` is opened create-new so an existing file is never truncated.
fn copy_file(source: &Path, target: &Path) -> Result<()> {
    let mut reader = File::open(source).map_err(|e| CollectError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
        .map_err(|e| CollectError::Create {
            path: target.to_path_buf(),
            source: e,
        })?;

    io::copy(&mut reader, &mut writer).map_err(|e| CollectError::Copy {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
