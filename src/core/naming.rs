//! Destination file naming

use crate::scanner::content_hash::ContentHash;

/// Split a file name at its last `.` into stem and extension
///
/// The extension keeps its leading dot. A name without a dot has an empty
/// extension.
pub fn split_extension(base_name: &str) -> (&str, &str) {
    match base_name.rfind('.') {
        Some(idx) => base_name.split_at(idx),
        None => (base_name, ""),
    }
}

/// Derive the name a source file gets inside the destination directory
///
/// The short hash is appended to the stem (`user.graphqls` becomes
/// `user_1a2b3c4d.graphqls`). A stem that already carries the short hash is
/// left alone so re-collected outputs are not tagged twice.
pub fn destination_file_name(base_name: &str, hash: &ContentHash) -> String {
    let (stem, ext) = split_extension(base_name);
    let short = hash.short();

    if stem.contains(short) {
        base_name.to_string()
    } else {
        format!("{}_{}{}", stem, short, ext)
    }
}
