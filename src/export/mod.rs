//! Export module for the utilisation table
//!
//! Provides export of the finished rows in multiple formats:
//! - CSV: spreadsheet-compatible, display headers as the first line
//! - JSON: machine-readable, with export metadata
//! - YAML: human-readable, with export metadata

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_rows_csv;
pub use json::{export_table_json, import_from_json, TableExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_table_yaml, import_from_yaml};

use std::io::Write;

use tracing::info;

use crate::config::ExportFormat;
use crate::error::UtilisationResult;
use crate::services::UtilisationTable;

/// Export the table in the given format
pub fn export_table<W: Write>(
    table: &UtilisationTable,
    format: ExportFormat,
    writer: &mut W,
    pretty_json: bool,
) -> UtilisationResult<()> {
    info!(%format, rows = table.len(), "exporting table");

    match format {
        ExportFormat::Csv => export_rows_csv(table.rows(), writer),
        ExportFormat::Json => export_table_json(table, writer, pretty_json),
        ExportFormat::Yaml => export_table_yaml(table, writer),
    }
}
