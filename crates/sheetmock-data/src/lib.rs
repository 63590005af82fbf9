//! # sheetmock-data
//!
//! Offline stand-in for a remote sheet provider. A fixture CSV is copied to a
//! working file on every load, parsed into a [`Table`], and single-row
//! updates are written back to the working file.
//!
//! ## Features
//!
//! - **Stateful sessions**: [`SheetSession`] retains the loaded table, with
//!   write-through updates or staged updates plus an explicit flush
//! - **Stateless provider**: [`DiskSheetProvider`] re-reads the working file on
//!   every update and locates rows by an embedded `ROW_ID` field
//! - **Injected paths**: [`ProviderConfig`] names the fixture and working files,
//!   so parallel tests never share state
//! - **Atomic saves**: the working file is replaced by rename, never truncated
//!
//! ## Example
//!
//! ```rust,ignore
//! use sheetmock_data::{ProviderConfig, RowData, SheetSession};
//!
//! let mut session = SheetSession::new(ProviderConfig::new("devdata/original_mock.csv", "mock.csv"));
//! let table = session.get_sheet_as_table("ignored")?;
//! println!("{} rows", table.len());
//!
//! let mut row = RowData::new();
//! row.insert("age".to_string(), "26".to_string());
//! session.update_row(2, &row, "ignored")?;
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod sources;
pub mod table;

// Re-exports
pub use config::{Encoding, ProviderConfig};
pub use error::{ErrorKind, Result, SheetError};
pub use provider::{reset_working_copy, DiskSheetProvider, SessionState, SheetSession};
pub use sources::CsvOptions;
pub use table::{Row, RowData, Table};
