use thiserror::Error;

/// Structural table errors. Cell-level data-quality issues are not errors;
/// they are absorbed as [`crate::CellValue::Missing`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A column named in a projection or transformation is absent.
    #[error("missing expected column '{0}'")]
    MissingColumn(String),

    /// Two columns would share the same canonical name.
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),
}

pub type Result<T> = std::result::Result<T, TableError>;
