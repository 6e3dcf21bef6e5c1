//! Error types for survey export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a raw survey export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Survey file not found.
    #[error("survey file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export uses an encoding the pipeline does not accept. UTF-8 and
    /// 8-bit Latin-family encodings are tolerated; UTF-16 is not.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse the delimited text.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// No header row (or no rows at all).
    #[error("survey file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Two raw labels canonicalized to the same column name.
    #[error("duplicate canonical column '{column}' in {path}")]
    DuplicateColumn { column: String, path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_file() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/survey.csv"),
        };
        assert_eq!(err.to_string(), "survey file not found: /data/survey.csv");
    }
}
