use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::finder::SearchPath;

/// One element of the data file's top-level array, kept untyped.
pub type Record = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("data file '{file_name}' not found on search path")]
    NotFound { file_name: String },

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/////////////////////////////
/// JSON LOADER FUNCTIONS ///
/////////////////////////////

/// Parse a JSON document whose top level is an array of objects.
pub fn parse_records(contents: &str) -> Result<Vec<Record>, serde_json::Error> {
    serde_json::from_str(contents)
}

pub fn load_records_from_path(path: &Path) -> Result<Vec<Record>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_records(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve `file_name` on `search` and load its records, reporting failures.
pub fn try_load_data(file_name: &str, search: &SearchPath) -> Result<Vec<Record>, LoadError> {
    let path = search.find(file_name).ok_or_else(|| LoadError::NotFound {
        file_name: file_name.to_string(),
    })?;

    let records = load_records_from_path(&path)?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "Loaded data file"
    );
    Ok(records)
}

/// Public API: load records from `file_name` on the default search path.
///
/// Never fails. A missing, unreadable or malformed file is logged and yields
/// an empty list, so callers cannot tell "no data" from "load failed".
pub fn load_data(file_name: &str) -> Vec<Record> {
    load_data_from(file_name, &SearchPath::default())
}

pub fn load_data_from(file_name: &str, search: &SearchPath) -> Vec<Record> {
    match try_load_data(file_name, search) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load data file");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_of_objects() {
        let records = parse_records(
            r#"[{"name": "Room 1", "description": "A dusty chamber."}, {"name": "Room 2", "depth": 3}]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "Room 1");
        assert_eq!(records[1]["depth"], 3);
    }

    #[test]
    fn empty_array_is_not_an_error() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array_top_level() {
        assert!(parse_records(r#"{"name": "Room 1"}"#).is_err());
    }

    #[test]
    fn rejects_array_of_scalars() {
        assert!(parse_records(r#"["Room 1", "Room 2"]"#).is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let search = SearchPath::new([dir.path()]);

        let err = try_load_data("no-such-file-here.json", &search).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "[{\"name\": ").unwrap();
        let search = SearchPath::new([dir.path()]);

        let err = try_load_data("broken.json", &search).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn failures_degrade_to_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "not json").unwrap();
        let search = SearchPath::new([dir.path()]);

        assert!(load_data_from("broken.json", &search).is_empty());
        assert!(load_data_from("no-such-file-here.json", &search).is_empty());
    }
}
