//! Schema Collector Library
//!
//! Gathers GraphQL schema files (`.graphqls`) from a source tree into a single
//! directory. Files are deduplicated by SHA-256 content hash and written under
//! hash-tagged names, so repeated runs only copy what is new.

pub mod core;
pub mod scanner;
pub mod reporting;

pub use crate::core::collector;
pub use crate::scanner::file_scanner;
pub use crate::reporting::report_writer;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::collector::{
        collect_schemas, CollectOutcome, CollectorConfig, SchemaCollector, SkippedFile,
    };
    pub use crate::core::error::{CollectError, Result};
    pub use crate::core::naming::{destination_file_name, split_extension};
    pub use crate::scanner::content_hash::{compute_file_hash, ContentHash};
    pub use crate::scanner::file_scanner::{collect_schema_files, SchemaFiles, SCHEMA_SUFFIX};
    pub use crate::reporting::report_writer::{write_json_report, write_report, CollectReport};
}
