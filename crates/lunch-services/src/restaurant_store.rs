//! In-memory restaurant table mirrored to a JSON file.
//!
//! The table in memory is the source of truth for the session. Every mutation
//! is applied first and then flushed; a failed flush is reported but never
//! rolled back, so memory and file may diverge until the next successful write.
//!
//! A file that exists but could not be read is never overwritten in place: the
//! first write after such a load moves it to `<file>.bak`.

use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::json_file::{move_to_backup, read_json, write_json_atomic};
use crate::restaurant::{validate_place_name, RestaurantRecord};

#[derive(Debug, Clone)]
pub struct RestaurantTable {
    path: PathBuf,
    rows: Vec<RestaurantRecord>,
    /// The file on disk failed to load and still holds the user's data.
    unreadable_on_disk: bool,
}

impl RestaurantTable {
    /// Empty table bound to a backing file. Nothing is read or written.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rows: Vec::new(),
            unreadable_on_disk: false,
        }
    }

    /// Parse every record in the backing file.
    ///
    /// # Errors
    /// Returns `StoreError::DataUnavailable` if the file is missing or corrupt.
    pub fn load_all(path: &Path) -> StoreResult<Vec<RestaurantRecord>> {
        let rows: Vec<RestaurantRecord> = read_json(path)?;
        tracing::info!(rows = rows.len(), "Loaded restaurants from {}", path.display());
        Ok(rows)
    }

    /// Open the table. On failure the table starts empty and the
    /// `DataUnavailable` error is handed back for the caller to act on.
    pub fn load(path: impl Into<PathBuf>) -> (Self, Option<StoreError>) {
        let mut table = Self::empty(path);
        match Self::load_all(&table.path) {
            Ok(rows) => {
                table.rows = rows;
                (table, None)
            }
            Err(e) => {
                tracing::warn!("Starting with an empty table: {}", e);
                table.unreadable_on_disk = table.path.exists();
                (table, Some(e))
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[RestaurantRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a record at the end and persist.
    ///
    /// # Errors
    /// `Validation` (nothing changed) for a blank name; `Persistence` (row
    /// kept in memory) if the write fails.
    pub fn append(&mut self, record: RestaurantRecord) -> StoreResult<()> {
        validate_place_name(&record.place_name)?;

        tracing::info!(place = %record.place_name, "Adding restaurant");
        self.rows.push(record);
        self.persist()
    }

    /// Replace the whole table with `rows`, keeping their order, and persist.
    ///
    /// # Errors
    /// `Validation` (nothing changed) if any row has a blank name;
    /// `Persistence` (new rows kept) if the write fails.
    pub fn edit_in_place(&mut self, rows: Vec<RestaurantRecord>) -> StoreResult<()> {
        if let Some(position) = rows
            .iter()
            .position(|row| validate_place_name(&row.place_name).is_err())
        {
            return Err(StoreError::validation(format!(
                "row {} has an empty place_name",
                position + 1
            )));
        }

        tracing::info!(before = self.rows.len(), after = rows.len(), "Replacing table");
        self.rows = rows;
        self.persist()
    }

    /// Remove every row whose name equals `place_name` exactly. Returns how
    /// many rows went away; zero is a no-op and writes nothing.
    ///
    /// # Errors
    /// `Persistence` (rows already removed) if the write fails.
    pub fn delete_by_name(&mut self, place_name: &str) -> StoreResult<usize> {
        let before = self.rows.len();
        self.rows.retain(|row| row.place_name != place_name);
        let removed = before - self.rows.len();

        if removed == 0 {
            tracing::debug!(place = place_name, "Nothing to delete");
            return Ok(0);
        }

        tracing::info!(place = place_name, removed, "Deleted restaurant rows");
        self.persist()?;
        Ok(removed)
    }

    /// Write the table to its backing file in current order.
    ///
    /// # Errors
    /// Returns `StoreError::Persistence`; the in-memory rows are untouched.
    /// If an unreadable file could not be moved aside nothing is written.
    pub fn persist(&mut self) -> StoreResult<()> {
        if self.unreadable_on_disk {
            move_to_backup(&self.path)?;
            self.unreadable_on_disk = false;
        }
        write_json_atomic(&self.path, &self.rows).map_err(|e| {
            tracing::warn!("{}", e);
            e
        })
    }
}
