//! CLI command for showing the table
//!
//! Builds the table from the roster and prints it to the terminal.

use std::path::PathBuf;

use clap::Args;

use crate::config::{Settings, UtilisationPaths};
use crate::display::format_table;
use crate::error::{UtilisationError, UtilisationResult};
use crate::services::UtilisationTable;

/// Arguments for `show`
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Roster dataset (JSON); defaults to the configured dataset
    pub dataset: Option<PathBuf>,

    /// Truncate person names to this many characters (0 = no limit)
    #[arg(short = 'w', long)]
    pub max_name_width: Option<usize>,
}

/// Handle the show command
pub fn handle_show_command(
    paths: &UtilisationPaths,
    settings: &Settings,
    args: ShowArgs,
) -> UtilisationResult<()> {
    let width = args.max_name_width.unwrap_or(settings.max_name_width);
    // Truncation needs room for at least one character plus "..."
    if (1..4).contains(&width) {
        return Err(UtilisationError::Validation(format!(
            "Name width must be 0 or at least 4, got {}",
            width
        )));
    }

    let dataset = settings.resolve_dataset(args.dataset, paths);
    let table = UtilisationTable::from_file(&dataset)?;

    println!("{}", format_table(&table, width));

    Ok(())
}
