//! sheetmock CLI - Command-line interface library
//!
//! Inspect and edit the mock provider's working file from a shell:
//! - Reset: Copy the fixture over the working file
//! - Show: Print the working table
//! - Update: Replace cells of one row
//!
//! # Binary Usage
//!
//! ```bash
//! # Start over from the fixture
//! sheetmock reset
//!
//! # Print the current working file as JSON
//! sheetmock show --format json
//!
//! # Mark row 2 as done
//! sheetmock update 2 --set status=done
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{reset_command, resolve_config, run_cli, show_command, update_command, OutputFormat};
