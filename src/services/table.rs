//! The utilisation table
//!
//! Built once from the roster and read-only afterwards.

use std::path::Path;

use tracing::{debug, info};

use crate::error::UtilisationResult;
use crate::models::{SourceRecord, TableRow};
use crate::storage::load_records;

use super::transform::transform;

/// Immutable table of per-person utilisation rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilisationTable {
    rows: Vec<TableRow>,
    records_read: usize,
    teams_skipped: usize,
}

impl UtilisationTable {
    /// Build the table from already loaded roster records
    pub fn build(records: &[SourceRecord]) -> UtilisationResult<Self> {
        let rows = transform(records)?;
        let teams_skipped = records.iter().filter(|r| r.is_team()).count();

        info!(rows = rows.len(), teams_skipped, "built utilisation table");

        Ok(Self {
            rows,
            records_read: records.len(),
            teams_skipped,
        })
    }

    /// Load a roster dataset from disk and build the table from it
    pub fn from_file<P: AsRef<Path>>(path: P) -> UtilisationResult<Self> {
        let path = path.as_ref();
        let records = load_records(path)?;
        debug!(path = %path.display(), records = records.len(), "loaded roster");
        Self::build(&records)
    }

    /// All rows, in roster order
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Iterate over the rows
    pub fn iter(&self) -> std::slice::Iter<'_, TableRow> {
        self.rows.iter()
    }

    /// Number of person rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of roster records the table was built from
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Number of team aggregates left out of the table
    pub fn teams_skipped(&self) -> usize {
        self.teams_skipped
    }
}

impl<'a> IntoIterator for &'a UtilisationTable {
    type Item = &'a TableRow;
    type IntoIter = std::slice::Iter<'a, TableRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
