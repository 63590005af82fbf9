//! CSV codec for fixture and working files.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::Encoding;
use crate::error::{Result, SheetError};
use crate::table::Table;

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Options for CSV parsing and writing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Byte-order mark handling
    pub encoding: Encoding,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            encoding: Encoding::Utf8Sig,
        }
    }
}

impl CsvOptions {
    /// Create options for tab-separated values (TSV)
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Default::default()
        }
    }

    /// Create options for semicolon-separated values (common in European locales)
    pub fn semicolon() -> Self {
        Self {
            delimiter: b';',
            ..Default::default()
        }
    }
}

/// Parse a delimited file with a header row into a [`Table`]
pub fn read_table(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Table> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let body = match options.encoding {
        Encoding::Utf8Sig => bytes.strip_prefix(BOM).unwrap_or(&bytes),
        Encoding::Utf8 => &bytes[..],
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .has_headers(true)
        .from_reader(body);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if columns.is_empty() {
        return Err(SheetError::MissingHeader(path.display().to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Table::new(columns, rows)
}

/// Serialize a [`Table`], header included, replacing `path` atomically
///
/// The table is written to a temporary file next to `path` and renamed over
/// it, so a failed write leaves the previous file in place.
pub fn write_table(path: impl AsRef<Path>, table: &Table, options: &CsvOptions) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    if options.encoding == Encoding::Utf8Sig {
        tmp.write_all(BOM)?;
    }

    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(tmp.as_file_mut());

        writer.write_record(table.columns())?;
        for row in table.raw_rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }

    if path.exists() {
        tmp.as_file()
            .set_permissions(fs::metadata(path)?.permissions())?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| SheetError::Io(e.error))?;
    Ok(())
}
