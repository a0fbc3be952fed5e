use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use species_engine::{EngineConfig, FetchSettings, DEFAULT_CATALOG_ROOT, DEFAULT_PAGE_LIMIT};

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "species_viewer.ron";

/// Optional overrides read from `species_viewer.ron`.
///
/// Every field may be left out; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub catalog_root: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub page_limit: usize,
    pub log_destination: LogDestination,
    pub verbose: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            catalog_root: DEFAULT_CATALOG_ROOT.to_string(),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            page_limit: DEFAULT_PAGE_LIMIT,
            log_destination: LogDestination::default(),
            verbose: false,
        }
    }
}

impl ViewerConfig {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            catalog_root: self.catalog_root.clone(),
            fetch: FetchSettings {
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                ..FetchSettings::default()
            },
            page_limit: self.page_limit,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Reads `species_viewer.ron` from `dir`. A missing file is not an error.
pub(crate) fn load_config(dir: &Path) -> Result<Option<ViewerConfig>, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path,
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_none() {
        let temp = TempDir::new().unwrap();
        assert!(load_config(temp.path()).unwrap().is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"(catalog_root: "http://localhost:8000/api/species/", page_limit: 7)"#,
        )
        .unwrap();

        let config = load_config(temp.path()).unwrap().unwrap();
        assert_eq!(config.catalog_root, "http://localhost:8000/api/species/");
        assert_eq!(config.page_limit, 7);
        assert_eq!(config.log_destination, LogDestination::File);
        assert_eq!(
            config.request_timeout_secs,
            ViewerConfig::default().request_timeout_secs
        );
    }

    #[test]
    fn log_destination_is_configurable() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            "(log_destination: Both, verbose: true)",
        )
        .unwrap();

        let config = load_config(temp.path()).unwrap().unwrap();
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn malformed_file_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "(page_limit: \"many\")").unwrap();

        let err = load_config(temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn engine_config_carries_overrides() {
        let config = ViewerConfig {
            request_timeout_secs: 3,
            page_limit: 2,
            ..ViewerConfig::default()
        };

        let engine = config.engine_config();
        assert_eq!(engine.catalog_root, DEFAULT_CATALOG_ROOT);
        assert_eq!(engine.fetch.request_timeout, Duration::from_secs(3));
        assert_eq!(engine.page_limit, 2);
    }
}
