//! CSV Export functionality
//!
//! Exports the utilisation rows to CSV, one line per person, with the display
//! headers as the first line.

use std::io::Write;

use crate::error::{UtilisationError, UtilisationResult};
use crate::models::row::headers;
use crate::models::TableRow;

/// Export rows to CSV
pub fn export_rows_csv<W: Write>(rows: &[TableRow], writer: &mut W) -> UtilisationResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(headers())
        .map_err(|e| UtilisationError::Export(e.to_string()))?;

    for row in rows {
        csv_writer
            .write_record(row.cells())
            .map_err(|e| UtilisationError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| UtilisationError::Export(e.to_string()))?;

    Ok(())
}
