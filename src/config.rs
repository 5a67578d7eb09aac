//! Application Configuration
//! Optional JSON settings file; every field falls back to a sensible default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "layer_dashboard.json";
/// Environment variable that points at an alternative settings file.
pub const CONFIG_ENV: &str = "LAYER_DASHBOARD_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where computed metrics are persisted.
    pub ledger_path: PathBuf,
    /// Suggested file name for the PDF summary.
    pub report_file_name: String,
    /// Static chart export size in pixels.
    pub chart_width: u32,
    pub chart_height: u32,
    /// Open exported files with the system viewer after saving.
    pub open_after_export: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ledger_path: PathBuf::from("data/hasil_produktivitas.csv"),
            report_file_name: "summary_ayam_layer.pdf".to_string(),
            chart_width: 1200,
            chart_height: 700,
            open_after_export: false,
        }
    }
}

impl AppConfig {
    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from `$LAYER_DASHBOARD_CONFIG`, else `layer_dashboard.json`.
    /// A missing default file is not an error.
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(path);
        }

        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard_paths() {
        let config = AppConfig::default();
        assert_eq!(
            config.ledger_path,
            PathBuf::from("data/hasil_produktivitas.csv")
        );
        assert_eq!(config.report_file_name, "summary_ayam_layer.pdf");
        assert!(!config.open_after_export);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "ledger_path": "tmp/ledger.csv" }"#).unwrap();
        assert_eq!(config.ledger_path, PathBuf::from("tmp/ledger.csv"));
        assert_eq!(config.chart_width, 1200);
        assert_eq!(config.report_file_name, "summary_ayam_layer.pdf");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(AppConfig::from_json("{ ledger_path: }").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AppConfig::load("/nonexistent/layer_dashboard.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("layer_dashboard.json"));
    }
}
