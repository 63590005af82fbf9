//! In-memory table model.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::error::{Result, SheetError};

/// Replacement payload for a row update: column name to cell value
pub type RowData = BTreeMap<String, String>;

/// An ordered sequence of rows sharing a fixed header
///
/// The column set is fixed at construction. Updates replace cell values of
/// existing rows and never add or remove rows or columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, checking that column names are unique and every row
    /// matches the header width
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(SheetError::DuplicateColumn(column.clone()));
            }
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(SheetError::RaggedRow {
                    row: i + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    /// Header column names in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column in the header
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at a 0-based index
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// Cell value at a 0-based row index and column name
    pub fn get(&self, index: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(index).map(|row| row[col].as_str())
    }

    /// Replace the named cells of the row at a 0-based index
    ///
    /// Columns absent from `data` keep their current values. The row is
    /// left untouched if any column in `data` is unknown.
    pub fn set_row(&mut self, index: usize, data: &RowData) -> Result<()> {
        let len = self.rows.len();
        if index >= len {
            return Err(SheetError::RowOutOfRange {
                row: index + 1,
                len,
            });
        }

        let mut assignments = Vec::with_capacity(data.len());
        for (column, value) in data {
            let col = self
                .column_index(column)
                .ok_or_else(|| SheetError::UnknownColumn(column.clone()))?;
            assignments.push((col, value));
        }

        let row = &mut self.rows[index];
        for (col, value) in assignments {
            row[col].clone_from(value);
        }
        Ok(())
    }

    pub(crate) fn raw_rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Borrowed view of a single row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl<'a> Row<'a> {
    /// Cell value for a column name
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i].as_str())
    }

    /// Cell values in header order
    pub fn values(&self) -> &'a [String] {
        self.values
    }

    /// `(column, value)` pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.columns
            .iter()
            .zip(self.values)
            .map(|(c, v)| (c.as_str(), v.as_str()))
    }

    /// Owned copy of this row as update payload
    pub fn to_data(&self) -> RowData {
        self.iter()
            .map(|(c, v)| (c.to_string(), v.to_string()))
            .collect()
    }
}
