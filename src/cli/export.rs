//! CLI command for exporting the table
//!
//! Writes the finished rows as CSV, JSON or YAML, to a file or stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::{ExportFormat, Settings, UtilisationPaths};
use crate::error::{UtilisationError, UtilisationResult};
use crate::export::export_table;
use crate::services::UtilisationTable;
use crate::storage::write_atomic;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Roster dataset (JSON); defaults to the configured dataset
    pub dataset: Option<PathBuf>,

    /// Export format; defaults to the configured format
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file path, replaced only once the export is complete; writes to
    /// stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Handle the export command
pub fn handle_export_command(
    paths: &UtilisationPaths,
    settings: &Settings,
    args: ExportArgs,
) -> UtilisationResult<()> {
    let dataset = settings.resolve_dataset(args.dataset, paths);
    let table = UtilisationTable::from_file(&dataset)?;

    let format = args.format.unwrap_or(settings.default_export_format);
    let pretty = settings.pretty_json && !args.compact;

    match args.output {
        Some(output) => {
            write_atomic(&output, |writer| export_table(&table, format, writer, pretty))?;

            info!(path = %output.display(), "export written");
            println!(
                "Exported {} rows as {} to: {}",
                table.len(),
                format,
                output.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export_table(&table, format, &mut writer, pretty)?;
            // serde_json leaves the document without a trailing newline
            if format == ExportFormat::Json {
                writeln!(writer).map_err(|e| UtilisationError::Export(e.to_string()))?;
            }
        }
    }

    Ok(())
}
