//! Error types for the mock sheet provider.

use thiserror::Error;

/// Result type for sheet operations
pub type Result<T> = std::result::Result<T, SheetError>;

/// Broad classification of a [`SheetError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation invoked before the required setup (e.g. save before load)
    Precondition,
    /// Row locator outside the table or not a valid index
    Index,
    /// Column name not present in the header, or repeated in it
    Column,
    /// Malformed delimited text
    Parse,
    /// Filesystem failure
    Io,
    /// Invalid provider configuration
    Config,
}

/// Errors that can occur while loading, updating or saving a sheet
#[derive(Debug, Error)]
pub enum SheetError {
    /// No table has been loaded yet
    #[error("{0}")]
    NotLoaded(String),

    /// Row locator outside the table's row range
    #[error("Row {row} out of range (table has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    /// Row payload carries no locator field
    #[error("Row data has no {0} field")]
    MissingRowId(String),

    /// Locator field is not a positive integer
    #[error("Invalid row id: {0:?}")]
    InvalidRowId(String),

    /// Column not present in the header
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Column name appears more than once in the header
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// File has no header row
    #[error("Missing header row in {0}")]
    MissingHeader(String),

    /// Data row width differs from the header
    #[error("Row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Fixture file does not exist
    #[error("Fixture not found: {0}")]
    FixtureNotFound(String),

    /// Invalid configuration value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML error
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SheetError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SheetError::NotLoaded(_) => ErrorKind::Precondition,
            SheetError::RowOutOfRange { .. }
            | SheetError::MissingRowId(_)
            | SheetError::InvalidRowId(_) => ErrorKind::Index,
            SheetError::UnknownColumn(_) | SheetError::DuplicateColumn(_) => ErrorKind::Column,
            SheetError::MissingHeader(_) | SheetError::RaggedRow { .. } | SheetError::Csv(_) => {
                ErrorKind::Parse
            }
            SheetError::FixtureNotFound(_) | SheetError::Io(_) => ErrorKind::Io,
            SheetError::InvalidConfig(_) | SheetError::Toml(_) => ErrorKind::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_loaded_message() {
        let err = SheetError::NotLoaded("No table to save".to_string());
        assert_eq!(err.to_string(), "No table to save");
        assert_eq!(err.kind(), ErrorKind::Precondition);
    }

    #[test]
    fn test_index_kinds() {
        assert_eq!(
            SheetError::RowOutOfRange { row: 5, len: 2 }.kind(),
            ErrorKind::Index
        );
        assert_eq!(
            SheetError::MissingRowId("ROW_ID".to_string()).kind(),
            ErrorKind::Index
        );
        assert_eq!(
            SheetError::InvalidRowId("abc".to_string()).kind(),
            ErrorKind::Index
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SheetError = io.into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
