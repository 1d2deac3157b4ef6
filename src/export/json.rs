//! JSON Export functionality
//!
//! Exports the utilisation rows to JSON with versioned export metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{UtilisationError, UtilisationResult};
use crate::models::TableRow;
use crate::services::UtilisationTable;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Table export structure shared by the JSON and YAML exporters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of person rows
    pub row_count: usize,

    /// Number of team records left out
    pub teams_skipped: usize,

    /// The rows, in roster order
    pub rows: Vec<TableRow>,
}

impl TableExport {
    /// Create an export snapshot of a built table
    pub fn from_table(table: &UtilisationTable) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            row_count: table.len(),
            teams_skipped: table.teams_skipped(),
            rows: table.rows().to_vec(),
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.row_count != self.rows.len() {
            return Err(format!(
                "Row count mismatch: header says {}, found {}",
                self.row_count,
                self.rows.len()
            ));
        }

        Ok(())
    }
}

/// Export the table to JSON
pub fn export_table_json<W: Write>(
    table: &UtilisationTable,
    writer: &mut W,
    pretty: bool,
) -> UtilisationResult<()> {
    let export = TableExport::from_table(table);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| UtilisationError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> UtilisationResult<TableExport> {
    let export: TableExport =
        serde_json::from_str(json_str).map_err(|e| UtilisationError::Export(e.to_string()))?;

    export.validate().map_err(UtilisationError::Export)?;

    Ok(export)
}
