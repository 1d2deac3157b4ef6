//! YAML Export functionality
//!
//! Exports the utilisation rows to YAML for human-readable sharing.

use std::io::Write;

use crate::error::{UtilisationError, UtilisationResult};
use crate::export::json::TableExport;
use crate::services::UtilisationTable;

/// Export the table to YAML format
pub fn export_table_yaml<W: Write>(table: &UtilisationTable, writer: &mut W) -> UtilisationResult<()> {
    let export = TableExport::from_table(table);

    writeln!(writer, "# Workforce Utilisation Export")
        .map_err(|e| UtilisationError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| UtilisationError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| UtilisationError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| UtilisationError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| UtilisationError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> UtilisationResult<TableExport> {
    let export: TableExport =
        serde_yaml::from_str(yaml_str).map_err(|e| UtilisationError::Export(e.to_string()))?;

    export.validate().map_err(UtilisationError::Export)?;

    Ok(export)
}
