//! Stateful row store adapter.

use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::error::{Result, SheetError};
use crate::provider::{position_to_index, reset_working_copy};
use crate::sources::{read_table, write_table};
use crate::table::{RowData, Table};

/// Lifecycle of a [`SheetSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No table loaded yet
    Uninitialized,
    /// A table is retained in memory
    Loaded,
}

/// Holds the table from the last load and writes it back to the working file
///
/// Rows are addressed by 1-based position. [`update_row`](Self::update_row)
/// writes through immediately; [`stage_update`](Self::stage_update) together
/// with [`flush`](Self::flush) lets the caller batch the disk write.
///
/// ```rust,ignore
/// let mut session = SheetSession::new(ProviderConfig::default());
/// let table = session.get_sheet_as_table("any-sheet")?;
/// assert_eq!(table.columns(), &["name", "age"]);
///
/// let mut row = RowData::new();
/// row.insert("age".into(), "26".into());
/// session.update_row(2, &row, "any-sheet")?;
/// ```
#[derive(Debug)]
pub struct SheetSession {
    config: ProviderConfig,
    table: Option<Table>,
    dirty: bool,
}

impl SheetSession {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            table: None,
            dirty: false,
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Reset the working file from the fixture and load it
    ///
    /// `sheet_id` is accepted for API compatibility and otherwise ignored.
    /// Any previously loaded table and unsaved changes are discarded.
    pub fn get_sheet_as_table(&mut self, sheet_id: &str) -> Result<&Table> {
        debug!("Ignoring sheet id {:?}", sheet_id);
        let options = self.config.csv_options()?;

        reset_working_copy(&self.config)?;
        let table = read_table(&self.config.working, &options)?;
        debug!(
            "Loaded {} rows x {} columns from {}",
            table.len(),
            table.columns().len(),
            self.config.working.display()
        );

        self.dirty = false;
        Ok(self.table.insert(table))
    }

    /// Apply an update to the retained table without touching disk
    pub fn stage_update(&mut self, row_id: usize, row: &RowData) -> Result<()> {
        let table = self
            .table
            .as_mut()
            .ok_or_else(|| SheetError::NotLoaded("No table loaded".to_string()))?;

        let index = position_to_index(row_id, table.len())?;
        table.set_row(index, row)?;
        self.dirty = true;
        debug!("Staged update of row {}", row_id);
        Ok(())
    }

    /// Update one row and write the whole table back to the working file
    ///
    /// Nothing is written if the locator or the payload is rejected.
    pub fn update_row(&mut self, row_id: usize, row: &RowData, sheet_id: &str) -> Result<()> {
        debug!("Ignoring sheet id {:?}", sheet_id);
        self.stage_update(row_id, row)?;
        self.save()?;
        info!("Updated row {} in {}", row_id, self.config.working.display());
        Ok(())
    }

    /// Write the retained table to the working file
    pub fn save(&mut self) -> Result<()> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| SheetError::NotLoaded("No table to save".to_string()))?;

        write_table(&self.config.working, table, &self.config.csv_options()?)?;
        self.dirty = false;
        info!(
            "Saved {} rows to {}",
            table.len(),
            self.config.working.display()
        );
        Ok(())
    }

    /// Alias of [`save`](Self::save) for callers using staged updates
    pub fn flush(&mut self) -> Result<()> {
        self.save()
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.table.is_some() {
            SessionState::Loaded
        } else {
            SessionState::Uninitialized
        }
    }

    /// Whether staged updates have not been written yet
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
