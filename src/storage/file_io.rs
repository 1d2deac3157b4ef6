//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::UtilisationError;

/// Read JSON from a file, returning an error if file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, UtilisationError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(UtilisationError::Dataset(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path).map_err(|e| {
        UtilisationError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        UtilisationError::Dataset(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write a file atomically (write to temp, then rename)
///
/// `write` fills a buffered writer on a temp file next to `path`. The target
/// is either completely written or not modified at all; on any failure the
/// temp file is removed.
pub fn write_atomic<P, F>(path: P, write: F) -> Result<(), UtilisationError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), UtilisationError>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            UtilisationError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| UtilisationError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let written = write(&mut writer).and_then(|()| {
        writer
            .flush()
            .map_err(|e| UtilisationError::Io(format!("Failed to flush data: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| UtilisationError::Io(format!("Failed to sync data: {}", e)))
    });
    drop(writer);

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        UtilisationError::Io(format!("Failed to rename temp file: {}", e))
    })
}

/// Write JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), UtilisationError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| UtilisationError::Json(format!("Failed to serialize data: {}", e)))
    })
}

/// `config.json` -> `config.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = read_json_required::<TestData, _>(&path).unwrap_err();
        assert!(matches!(err, UtilisationError::Dataset(_)));
    }

    #[test]
    fn test_read_invalid_json_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json_required::<TestData, _>(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("test.json");
        let temp_path = temp_dir.path().join("nested").join("test.json.tmp");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();
        assert!(path.exists());
        assert!(!temp_path.exists());

        let loaded: TestData = read_json_required(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_failed_write_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.csv");
        fs::write(&path, "previous").unwrap();

        let result = write_atomic(&path, |writer| {
            writer.write_all(b"partial").unwrap();
            Err(UtilisationError::Export("boom".into()))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
        assert!(!temp_dir.path().join("table.csv.tmp").exists());
    }

    #[test]
    fn test_write_atomic_replaces_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.csv");
        fs::write(&path, "previous").unwrap();

        write_atomic(&path, |writer| {
            writer
                .write_all(b"fresh")
                .map_err(|e| UtilisationError::Io(e.to_string()))
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }
}
