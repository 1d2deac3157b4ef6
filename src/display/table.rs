//! Utilisation table display formatting
//!
//! Renders the finished rows for the terminal. Column headers come from the
//! row type; values are printed exactly as the table holds them.

use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Modify, Style, Width};
use tabled::Table;

use crate::models::TableRow;
use crate::services::UtilisationTable;

/// Render rows as a bordered terminal table
///
/// `max_name_width` truncates the person column; 0 leaves it untouched.
pub fn format_rows(rows: &[TableRow], max_name_width: usize) -> String {
    if rows.is_empty() {
        return "No people found.".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    if max_name_width > 0 {
        table.with(
            Modify::new(Columns::first()).with(Width::truncate(max_name_width).suffix("...")),
        );
    }

    table.to_string()
}

/// Render the whole table followed by a one-line summary
pub fn format_table(table: &UtilisationTable, max_name_width: usize) -> String {
    let mut output = format_rows(table.rows(), max_name_width);
    output.push('\n');
    output.push_str(&format_summary(table));
    output
}

/// Summary line: people shown and team records left out
pub fn format_summary(table: &UtilisationTable) -> String {
    let people = match table.len() {
        1 => "1 person".to_string(),
        n => format!("{} people", n),
    };
    match table.teams_skipped() {
        0 => people,
        1 => format!("{} (1 team record skipped)", people),
        n => format!("{} ({} team records skipped)", people, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceRecord;

    fn table() -> UtilisationTable {
        let records: Vec<SourceRecord> = serde_json::from_str(
            r#"[
                { "teams": {} },
                { "teams": {} },
                { "externals": { "name": "Max Muster", "hourlyRateForProjects": "50" } }
            ]"#,
        )
        .unwrap();
        UtilisationTable::build(&records).unwrap()
    }

    #[test]
    fn test_format_rows_has_headers_and_values() {
        let table = table();
        let output = format_rows(table.rows(), 0);

        for header in crate::models::row::headers() {
            assert!(output.contains(header), "missing header {}", header);
        }
        assert!(output.contains("Max Muster"));
        assert!(output.contains("NaN %"));
        assert!(output.contains("0,00\u{a0}€"));
    }

    #[test]
    fn test_format_rows_empty() {
        assert_eq!(format_rows(&[], 0), "No people found.");
    }

    #[test]
    fn test_name_truncation() {
        let table = table();
        let output = format_rows(table.rows(), 6);
        assert!(!output.contains("Max Muster"));
        assert!(output.contains("..."));
    }

    #[test]
    fn test_summary() {
        let table = table();
        assert_eq!(format_summary(&table), "1 person (2 team records skipped)");

        let output = format_table(&table, 0);
        assert!(output.ends_with("1 person (2 team records skipped)"));
    }
}
