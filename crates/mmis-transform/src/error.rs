use thiserror::Error;

use mmis_model::TableError;

/// Structural transformation failures, tagged with the stage that raised
/// them. Cell-level issues never surface here; they become missing values.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("split: {0}")]
    Split(#[source] TableError),

    #[error("instrument: {0}")]
    Instrument(#[source] TableError),

    #[error("decode: {0}")]
    Decode(#[source] TableError),

    #[error("duration: {0}")]
    Duration(#[source] TableError),

    #[error("dedupe: {0}")]
    Dedupe(#[source] TableError),

    #[error("finalize: {0}")]
    Finalize(#[source] TableError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
