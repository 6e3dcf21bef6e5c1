//! Survey export ingestion: encoding-tolerant CSV loading and column label
//! canonicalization.

pub mod error;
pub mod header;
pub mod reader;

pub use error::{IngestError, Result};
pub use header::{canonicalize_label, canonicalize_levels};
pub use reader::{ReadOptions, read_survey_table};
