//! Application configuration loading.
//!
//! Read from `config.toml` under the platform config directory. Any load
//! or parse failure falls back to defaults with a warning; a broken config
//! file never stops the client from starting.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::{GeoFieldError, Result};

/// Default records per page on tabular views.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Application configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory downloads are written to; `None` uses the platform
    /// download directory.
    pub export_dir: Option<PathBuf>,
    /// Records per page on tabular views.
    pub page_size: usize,
    /// Operator name pre-filled into forms with a `geologist` field.
    pub operator: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: None,
            page_size: DEFAULT_PAGE_SIZE,
            operator: None,
        }
    }
}

impl AppConfig {
    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&raw)
            .map_err(|e| GeoFieldError::Config(format!("{}: {}", path.display(), e)))?;
        if config.page_size == 0 {
            return Err(GeoFieldError::Config(format!(
                "{}: page_size must be positive",
                path.display()
            )));
        }
        // Expand a relative export_dir against the config file's directory.
        if let (Some(dir), Some(parent)) = (&config.export_dir, path.parent()) {
            if dir.is_relative() {
                config.export_dir = Some(parent.join(dir));
            }
        }
        Ok(config)
    }

    /// Load configuration from the platform config directory, or defaults.
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid config: {}", e);
                Self::default()
            }
        }
    }
}

/// Path of the user's `config.toml`, when a config directory exists.
pub fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "geofield").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Directory the desktop app writes its rolling logs to.
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "geofield").map(|dirs| dirs.data_dir().join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("geofield_test_config").join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.export_dir.is_none());
        assert!(config.operator.is_none());
    }

    #[test]
    fn test_from_file_full_config() {
        let dir = scratch("full");
        let path = dir.join("config.toml");
        fs::write(
            &path,
            "export_dir = \"/tmp/exports\"\npage_size = 25\noperator = \"A. Keita\"\n",
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/exports")));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.operator.as_deref(), Some("A. Keita"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_from_file_partial_config_keeps_defaults() {
        let dir = scratch("partial");
        let path = dir.join("config.toml");
        fs::write(&path, "operator = \"J. Doe\"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.operator.as_deref(), Some("J. Doe"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let dir = scratch("garbage");
        let path = dir.join("config.toml");
        fs::write(&path, "page_size = \"lots\"").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_from_file_rejects_zero_page_size() {
        let dir = scratch("zero");
        let path = dir.join("config.toml");
        fs::write(&path, "page_size = 0").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_relative_export_dir_resolves_against_config_dir() {
        let dir = scratch("relative");
        let path = dir.join("config.toml");
        fs::write(&path, "export_dir = \"exports\"").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.export_dir, Some(dir.join("exports")));

        let _ = fs::remove_dir_all(dir);
    }
}
