//! Provider configuration.
//!
//! Paths are injected per handle so that independent sessions (and parallel
//! tests) never share a working file unless asked to.
//!
//! ```toml
//! fixture = "devdata/original_mock.csv"
//! working = "mock.csv"
//! encoding = "utf-8-sig"
//! delimiter = ","
//! quote = '"'
//! row_id_column = "ROW_ID"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SheetError};
use crate::sources::CsvOptions;

/// Default location of the fixture, relative to the process CWD
pub const DEFAULT_FIXTURE: &str = "devdata/original_mock.csv";

/// Default location of the working copy, relative to the process CWD
pub const DEFAULT_WORKING: &str = "mock.csv";

/// Default name of the locator field used by the stateless provider
pub const DEFAULT_ROW_ID_COLUMN: &str = "ROW_ID";

/// Text encoding of the fixture and working files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Encoding {
    /// Plain UTF-8, bytes taken as-is
    #[serde(rename = "utf-8")]
    Utf8,
    /// UTF-8 with an optional leading byte-order mark on read, written on save
    #[default]
    #[serde(rename = "utf-8-sig")]
    Utf8Sig,
}

/// Where the provider reads its fixture and keeps its working copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Read-only source copied on every load
    pub fixture: PathBuf,
    /// Mutable copy that updates and saves are written to
    pub working: PathBuf,
    /// File encoding
    pub encoding: Encoding,
    /// Field delimiter
    pub delimiter: char,
    /// Quote character
    pub quote: char,
    /// Field of an update payload that carries the 1-based row locator
    pub row_id_column: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            fixture: PathBuf::from(DEFAULT_FIXTURE),
            working: PathBuf::from(DEFAULT_WORKING),
            encoding: Encoding::default(),
            delimiter: ',',
            quote: '"',
            row_id_column: DEFAULT_ROW_ID_COLUMN.to_string(),
        }
    }
}

impl ProviderConfig {
    /// Create a config with explicit fixture and working paths
    pub fn new(fixture: impl Into<PathBuf>, working: impl Into<PathBuf>) -> Self {
        Self {
            fixture: fixture.into(),
            working: working.into(),
            ..Default::default()
        }
    }

    /// Use a different file encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Parse a config from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.csv_options()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    ///
    /// Relative fixture and working paths are kept relative to the process
    /// CWD, not to the config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// CSV codec options derived from this config
    pub fn csv_options(&self) -> Result<CsvOptions> {
        Ok(CsvOptions {
            delimiter: ascii_byte("delimiter", self.delimiter)?,
            quote: ascii_byte("quote", self.quote)?,
            encoding: self.encoding,
        })
    }
}

fn ascii_byte(field: &str, c: char) -> Result<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(SheetError::InvalidConfig(format!(
            "{field} must be a single ASCII character, got {c:?}"
        )))
    }
}
