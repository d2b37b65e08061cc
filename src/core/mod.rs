//! Collection pass, naming rules and errors

pub mod collector;
pub mod error;
pub mod naming;

pub use collector::{collect_schemas, CollectOutcome, CollectorConfig, SchemaCollector, SkippedFile};
pub use error::{CollectError, Result};
pub use naming::destination_file_name;
