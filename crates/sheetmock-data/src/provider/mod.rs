//! Row store adapters.
//!
//! Two flavours share the same fixture/working-file lifecycle:
//!
//! - [`SheetSession`] keeps the last loaded table and writes it back on
//!   request, addressing rows by a 1-based position.
//! - [`DiskSheetProvider`] keeps nothing in memory and re-reads the working
//!   file on every update, taking the 1-based position from a locator field
//!   of the update payload.

pub mod disk;
pub mod session;

pub use disk::DiskSheetProvider;
pub use session::{SessionState, SheetSession};
pub use crate::table::RowData;

use std::fs;

use tracing::debug;

use crate::config::ProviderConfig;
use crate::error::{Result, SheetError};

/// Overwrite the working file with a fresh copy of the fixture
pub fn reset_working_copy(config: &ProviderConfig) -> Result<()> {
    if !config.fixture.is_file() {
        return Err(SheetError::FixtureNotFound(
            config.fixture.display().to_string(),
        ));
    }

    if let Some(parent) = config.working.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::copy(&config.fixture, &config.working)?;
    debug!(
        "Reset {} from fixture {}",
        config.working.display(),
        config.fixture.display()
    );
    Ok(())
}

/// Convert a 1-based row locator to a table index
pub(crate) fn position_to_index(row_id: usize, len: usize) -> Result<usize> {
    match row_id.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => Err(SheetError::RowOutOfRange { row: row_id, len }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_reset_creates_working_copy() {
        let dir = TempDir::new().unwrap();
        let fixture = dir.path().join("seed.csv");
        fs::write(&fixture, "a,b\n1,2\n").unwrap();
        let config = ProviderConfig::new(&fixture, dir.path().join("nested/work/mock.csv"));

        reset_working_copy(&config).unwrap();

        assert_eq!(fs::read_to_string(&config.working).unwrap(), "a,b\n1,2\n");
    }

    #[test]
    fn test_reset_overwrites_previous_copy() {
        let dir = TempDir::new().unwrap();
        let fixture = dir.path().join("seed.csv");
        let working = dir.path().join("mock.csv");
        fs::write(&fixture, "a\n1\n").unwrap();
        fs::write(&working, "a\nstale\nrows\n").unwrap();

        reset_working_copy(&ProviderConfig::new(&fixture, &working)).unwrap();

        assert_eq!(fs::read_to_string(&working).unwrap(), "a\n1\n");
    }

    #[test]
    fn test_reset_missing_fixture() {
        let dir = TempDir::new().unwrap();
        let config = ProviderConfig::new(dir.path().join("absent.csv"), dir.path().join("m.csv"));

        let err = reset_working_copy(&config).unwrap_err();

        assert!(matches!(err, SheetError::FixtureNotFound(_)));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!config.working.exists());
    }

    #[test]
    fn test_position_to_index() {
        assert_eq!(position_to_index(1, 2).unwrap(), 0);
        assert_eq!(position_to_index(2, 2).unwrap(), 1);
        assert!(matches!(
            position_to_index(0, 2),
            Err(SheetError::RowOutOfRange { row: 0, len: 2 })
        ));
        assert!(matches!(
            position_to_index(3, 2),
            Err(SheetError::RowOutOfRange { row: 3, len: 2 })
        ));
    }
}
