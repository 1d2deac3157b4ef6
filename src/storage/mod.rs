//! Storage layer for the utilisation table
//!
//! Reads the roster dataset, persists settings as JSON files and writes
//! exports without leaving partial files behind.

pub mod file_io;

pub use file_io::{read_json_required, write_atomic, write_json_atomic};

use std::path::Path;

use crate::error::UtilisationResult;
use crate::models::SourceRecord;

/// Load the roster dataset: a JSON array of source records
pub fn load_records<P: AsRef<Path>>(path: P) -> UtilisationResult<Vec<SourceRecord>> {
    read_json_required(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roster.json");
        fs::write(
            &path,
            r#"[{ "teams": {} }, { "employees": { "name": "A" } }]"#,
        )
        .unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_team());
        assert!(!records[1].is_team());
    }

    #[test]
    fn test_load_records_rejects_non_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roster.json");
        fs::write(&path, r#"{ "employees": {} }"#).unwrap();

        assert!(load_records(&path).is_err());
    }
}
