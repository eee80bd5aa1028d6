//! User configuration (`config.toml` in the data directory)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::storage::StorageError;

const CONFIG_FILE: &str = "config.toml";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct TrackerConfig {
    /// Where the snapshot lives; defaults to the config's own directory
    pub data_dir: Option<PathBuf>,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
    /// Colorize terminal output
    pub color: bool,
    /// Unrecognized `log_level` replaced by the default, for the caller to
    /// report once logging is up
    #[serde(skip)]
    pub ignored_log_level: Option<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: "warn".to_string(),
            color: true,
            ignored_log_level: None,
        }
    }
}

impl TrackerConfig {
    /// Load `config.toml` from `dir`; a missing file gives the defaults
    pub fn load(dir: &Path) -> Result<Self, StorageError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, StorageError> {
        let mut config: TrackerConfig = toml::from_str(content)?;

        let level = config.log_level.to_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            config.log_level = level;
        } else {
            config.ignored_log_level = Some(std::mem::replace(
                &mut config.log_level,
                Self::default().log_level,
            ));
        }

        Ok(config)
    }

    /// Directory holding the snapshot
    pub fn resolve_data_dir(&self, config_dir: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| config_dir.to_path_buf())
    }
}
