//! CSV file data adapter.

use crate::adapters::ini_config::IngestConfig;
use crate::domain::error::SimfeedError;
use crate::domain::loader;
use crate::domain::record::RecordCollection;
use crate::ports::record_source::RecordSource;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Serves one delimited data file per code from a base directory,
/// named `<CODE>.<extension>`.
pub struct CsvFileAdapter {
    base_path: PathBuf,
    extension: String,
}

impl CsvFileAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            extension: "csv".to_string(),
        }
    }

    pub fn from_config(config: &IngestConfig) -> Self {
        Self {
            base_path: config.data_dir.clone(),
            extension: config.extension.clone(),
        }
    }

    fn data_path(&self, code: &str) -> PathBuf {
        self.base_path.join(format!("{}.{}", code, self.extension))
    }
}

impl RecordSource for CsvFileAdapter {
    fn load_records(&self, code: &str) -> Result<RecordCollection, SimfeedError> {
        let path = self.data_path(code);
        let file = File::open(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SimfeedError::NoData {
                    code: code.to_string(),
                }
            } else {
                SimfeedError::Source {
                    reason: format!("failed to open {}: {}", path.display(), e),
                }
            }
        })?;

        loader::load_from_reader(BufReader::new(file))
    }

    fn list_codes(&self) -> Result<Vec<String>, SimfeedError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| SimfeedError::Source {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let suffix = format!(".{}", self.extension);
        let mut codes = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| SimfeedError::Source {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if name_str.ends_with(&suffix) {
                let code = &name_str[..name_str.len() - suffix.len()];
                codes.push(code.to_string());
            }
        }

        codes.sort();
        Ok(codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::DataValue;
    use tempfile::TempDir;

    fn setup_test_data() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();

        let content = "2024-01-15,100.0,50000\n\
            2024-01-16,105.0,60000\n";

        fs::write(path.join("BHP.csv"), content).unwrap();
        fs::write(path.join("CBA.csv"), "2024-01-15,140.0,20000\n").unwrap();
        fs::write(path.join("notes.txt"), "not a data file\n").unwrap();

        (dir, path)
    }

    #[test]
    fn load_records_returns_tokens_in_order() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvFileAdapter::new(path);

        let records = adapter.load_records("BHP").unwrap();

        assert_eq!(records.len(), 6);
        assert_eq!(records.get(0), Some(&DataValue::from("2024-01-15")));
        assert_eq!(records.get(1), Some(&DataValue::from("100.0")));
        assert_eq!(records.get(2), Some(&DataValue::from("50000")));
        assert_eq!(records.get(3), Some(&DataValue::from("2024-01-16")));
    }

    #[test]
    fn load_records_missing_code_is_no_data() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvFileAdapter::new(path);

        let result = adapter.load_records("XYZ");
        assert!(matches!(result, Err(SimfeedError::NoData { code }) if code == "XYZ"));
    }

    #[test]
    fn list_codes_returns_sorted_matching_files() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvFileAdapter::new(path);

        let codes = adapter.list_codes().unwrap();
        assert_eq!(codes, vec!["BHP", "CBA"]);
    }

    #[test]
    fn list_codes_missing_directory_is_source_error() {
        let adapter = CsvFileAdapter::new(PathBuf::from("/nonexistent/simfeed/data"));
        let result = adapter.list_codes();
        assert!(matches!(result, Err(SimfeedError::Source { .. })));
    }

    #[test]
    fn custom_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();
        fs::write(path.join("BHP.dat"), "a,b\n").unwrap();

        let adapter = CsvFileAdapter {
            base_path: path,
            extension: "dat".to_string(),
        };

        assert_eq!(adapter.list_codes().unwrap(), vec!["BHP"]);
        assert_eq!(adapter.load_records("BHP").unwrap().len(), 2);
    }
}
