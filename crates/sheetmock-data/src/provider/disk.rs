//! Stateless row store adapter.

use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::error::{Result, SheetError};
use crate::provider::{position_to_index, reset_working_copy};
use crate::sources::{read_table, write_table};
use crate::table::{RowData, Table};

/// Works directly against the working file, keeping no table between calls
///
/// Every update re-reads the file, so sequential updates always apply to the
/// latest saved state. The target row comes from the payload's locator field
/// (`ROW_ID` by default), holding a 1-based position.
#[derive(Debug, Clone)]
pub struct DiskSheetProvider {
    config: ProviderConfig,
}

impl DiskSheetProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Reset the working file from the fixture and parse it
    ///
    /// `sheet_id` is accepted for API compatibility and otherwise ignored.
    pub fn get_sheet_as_table(&self, sheet_id: &str) -> Result<Table> {
        debug!("Ignoring sheet id {:?}", sheet_id);
        reset_working_copy(&self.config)?;
        self.read_table()
    }

    /// Parse the working file as it currently is on disk
    pub fn read_table(&self) -> Result<Table> {
        if !self.config.working.is_file() {
            return Err(SheetError::NotLoaded(format!(
                "No working file at {}",
                self.config.working.display()
            )));
        }
        read_table(&self.config.working, &self.config.csv_options()?)
    }

    /// Replace the row named by the payload's locator field and save
    ///
    /// If the table has a column named like the locator field, that column is
    /// written with the parsed position; otherwise the locator is used for
    /// addressing only.
    pub fn update_row(&self, row: &RowData, sheet_id: &str) -> Result<()> {
        let key = self.config.row_id_column.as_str();
        let raw = row
            .get(key)
            .ok_or_else(|| SheetError::MissingRowId(key.to_string()))?;
        let row_id: usize = raw
            .trim()
            .parse()
            .map_err(|_| SheetError::InvalidRowId(raw.clone()))?;

        let mut values = row.clone();
        values.insert(key.to_string(), row_id.to_string());
        self.write_row(row_id, values, true, sheet_id)
    }

    /// Replace the row at a 1-based position and save
    ///
    /// Every entry of `row` is a plain cell assignment, including one named
    /// like the locator field.
    pub fn update_row_at(&self, row_id: usize, row: &RowData, sheet_id: &str) -> Result<()> {
        self.write_row(row_id, row.clone(), false, sheet_id)
    }

    fn write_row(
        &self,
        row_id: usize,
        mut values: RowData,
        drop_locator: bool,
        sheet_id: &str,
    ) -> Result<()> {
        debug!("Ignoring sheet id {:?}", sheet_id);
        let mut table = self.read_table()?;
        let index = position_to_index(row_id, table.len())?;

        let key = self.config.row_id_column.as_str();
        if drop_locator && table.column_index(key).is_none() {
            values.remove(key);
        }
        table.set_row(index, &values)?;

        write_table(&self.config.working, &table, &self.config.csv_options()?)?;
        info!("Updated row {} in {}", row_id, self.config.working.display());
        Ok(())
    }
}
