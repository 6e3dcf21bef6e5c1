//! Survey table transformations.
//!
//! Each stage is a pure function from table to table (in-place mutation of
//! an owned table counts): schema mapping, splitting, instrument column
//! cleaning, categorical decoding, duration parsing, and first-wins
//! deduplication. Structural problems surface as [`TransformError`];
//! cell-level data quality issues become missing values.

pub mod decode;
pub mod dedupe;
pub mod duration;
pub mod error;
pub mod instrument;
pub mod rename;
pub mod split;

pub use decode::{DecodeStats, decode_categoricals, decode_field};
pub use dedupe::dedupe_by_key;
pub use duration::{convert_duration_column, parse_clock_duration};
pub use error::{Result, TransformError};
pub use instrument::{canonical_item_name, clean_instrument_columns};
pub use rename::apply_schema_mapping;
pub use split::{finalize_participant_columns, split_tables};
