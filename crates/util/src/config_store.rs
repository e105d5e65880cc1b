//! Widget configuration file loading for native tools.
//!
//! The file lives in the standard configuration directory
//! (`~/.config/wavdrop/widget.json` on most platforms) unless
//! `WAVDROP_CONFIG_PATH` points elsewhere. A missing default file is not an
//! error: the stock configuration is used instead.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use thiserror::Error;
use tracing::{debug, warn};
use wavdrop_types::{ConfigError, WidgetConfig};

use crate::expand_tilde;

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "WAVDROP_CONFIG_PATH";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "widget.json";

/// Error surfaced when loading a configuration file fails.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config at {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

/// Resolves the config path from the environment or the config directory.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wavdrop")
        .join(CONFIG_FILE_NAME)
}

/// Loads the widget configuration.
///
/// An explicit `path` must exist and parse. Without one, the default location
/// is tried and any problem other than a validation failure falls back to the
/// stock configuration.
pub fn load_widget_config(path: Option<&Path>) -> Result<WidgetConfig, ConfigStoreError> {
    match path {
        Some(path) => read_config(path),
        None => {
            let path = default_config_path();
            match read_config(&path) {
                Ok(config) => Ok(config),
                Err(ConfigStoreError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                    debug!(path = %path.display(), "no widget config file; using defaults");
                    Ok(WidgetConfig::default())
                }
                Err(ConfigStoreError::Invalid {
                    source: ConfigError::Parse(error),
                    ..
                }) => {
                    warn!(
                        path = %path.display(),
                        error = %error,
                        "Failed to parse widget config file; using defaults"
                    );
                    Ok(WidgetConfig::default())
                }
                Err(error) => Err(error),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<WidgetConfig, ConfigStoreError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigStoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    WidgetConfig::from_json_str(&data).map_err(|source| ConfigStoreError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("widget.json");
        fs::write(&path, r#"{"rejection_text": "WAV only"}"#).unwrap();

        let config = load_widget_config(Some(&path)).unwrap();
        assert_eq!(config.rejection_text, "WAV only");
        assert_eq!(config.accepted_mime_type, "audio/wav");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        let error = load_widget_config(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(error, ConfigStoreError::Io { .. }));
    }

    #[test]
    fn default_path_honors_env_override() {
        let override_path = "~/custom/widget.json";
        temp_env::with_var(CONFIG_PATH_ENV, Some(override_path), || {
            assert_eq!(default_config_path(), expand_tilde(override_path));
        });
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");
        temp_env::with_var(CONFIG_PATH_ENV, Some(path.to_str().unwrap()), || {
            assert_eq!(load_widget_config(None).unwrap(), WidgetConfig::default());
        });
    }

    #[test]
    fn unparsable_default_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("widget.json");
        fs::write(&path, "not json").unwrap();
        temp_env::with_var(CONFIG_PATH_ENV, Some(path.to_str().unwrap()), || {
            assert_eq!(load_widget_config(None).unwrap(), WidgetConfig::default());
        });
    }

    #[test]
    fn invalid_default_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("widget.json");
        fs::write(&path, r#"{"accepted_mime_type": ""}"#).unwrap();
        temp_env::with_var(CONFIG_PATH_ENV, Some(path.to_str().unwrap()), || {
            let error = load_widget_config(None).unwrap_err();
            assert!(matches!(
                error,
                ConfigStoreError::Invalid {
                    source: ConfigError::EmptyField("accepted_mime_type"),
                    ..
                }
            ));
        });
    }
}
