//! File scanning and content hashing

pub mod content_hash;
pub mod file_scanner;

pub use content_hash::{compute_file_hash, ContentHash};
pub use file_scanner::{collect_schema_files, SchemaFiles, SCHEMA_SUFFIX};
