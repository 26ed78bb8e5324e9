//! INI file ingestion configuration.

use crate::domain::error::SimfeedError;
use configparser::ini::Ini;
use std::path::{Path, PathBuf};

/// Where to find the per-code data files.
///
/// ```ini
/// [data]
/// dir = /var/lib/simfeed/data
/// extension = csv
/// ```
///
/// `extension` is optional and defaults to `csv`.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub data_dir: PathBuf,
    pub extension: String,
}

impl IngestConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimfeedError> {
        let file = path.as_ref().display().to_string();
        let mut ini = Ini::new();
        ini.load(path.as_ref())
            .map_err(|reason| SimfeedError::ConfigParse {
                file: file.clone(),
                reason,
            })?;
        Self::from_ini(&ini)
    }

    pub fn from_string(content: &str) -> Result<Self, SimfeedError> {
        let mut ini = Ini::new();
        ini.read(content.to_string())
            .map_err(|reason| SimfeedError::ConfigParse {
                file: "<inline>".to_string(),
                reason,
            })?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, SimfeedError> {
        let dir = ini
            .get("data", "dir")
            .ok_or_else(|| SimfeedError::ConfigMissing {
                section: "data".to_string(),
                key: "dir".to_string(),
            })?;

        let extension = ini
            .get("data", "extension")
            .unwrap_or_else(|| "csv".to_string());
        if extension.is_empty() || extension.starts_with('.') {
            return Err(SimfeedError::ConfigInvalid {
                section: "data".to_string(),
                key: "extension".to_string(),
                reason: "expected a bare extension without the leading dot".to_string(),
            });
        }

        Ok(Self {
            data_dir: PathBuf::from(dir),
            extension,
        })
    }
}
