//! Schema file discovery

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::Result;

/// File-name suffix of GraphQL schema files
pub const SCHEMA_SUFFIX: &str = ".graphqls";

/// Lazily walks a search root, yielding schema files in traversal order
///
/// Entries are sorted by file name at each directory level. Symlinked
/// directories are not descended, but a symlink that resolves to a file is
/// yielded like a regular file.
///
/// The `exclude` directory (typically the destination) never contributes
/// files. Below the root it is pruned together with everything under it;
/// when it is the root itself only its direct children are left out.
pub struct SchemaFiles {
    walker: walkdir::FilterEntry<walkdir::IntoIter, Box<dyn FnMut(&walkdir::DirEntry) -> bool>>,
    exclude: Option<PathBuf>,
    suffix: String,
}

impl SchemaFiles {
    pub fn new(root: &Path, exclude: Option<&Path>, suffix: &str) -> Self {
        let exclude = exclude.map(Path::to_path_buf);
        let pruned = exclude.clone();
        let keep: Box<dyn FnMut(&walkdir::DirEntry) -> bool> = Box::new(move |entry| {
            !(entry.depth() > 0
                && entry.file_type().is_dir()
                && pruned.as_deref() == Some(entry.path()))
        });

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(keep);

        Self {
            walker,
            exclude,
            suffix: suffix.to_string(),
        }
    }
}

impl Iterator for SchemaFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };
            if !entry.file_name().to_string_lossy().ends_with(&self.suffix) {
                continue;
            }
            let is_file = if entry.path_is_symlink() {
                entry.path().is_file()
            } else {
                entry.file_type().is_file()
            };
            if !is_file || entry.path().parent() == self.exclude.as_deref() {
                continue;
            }
            return Some(Ok(entry.into_path()));
        }
    }
}

/// Collect all schema files below a directory
///
/// # Arguments
/// * `root` - Directory to scan recursively
/// * `exclude` - Directory to leave out of the walk, if any
/// * `suffix` - File-name suffix to match
///
/// # Returns
/// Schema file paths in traversal order
pub fn collect_schema_files(root: &Path, exclude: Option<&Path>, suffix: &str) -> Result<Vec<PathBuf>> {
    SchemaFiles::new(root, exclude, suffix).collect()
}
