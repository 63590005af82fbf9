//! Delimited-text sources.
//!
//! The fixture and working files share one codec; only the paths differ.

pub mod csv;

pub use self::csv::{read_table, write_table, CsvOptions};
