use crate::core::notifier::DEFAULT_THRESHOLD;
use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_threshold")]
    pub low_quantity_threshold: u32,
    #[serde(default = "default_true")]
    pub low_quantity_alert: bool,
    #[serde(default = "default_shelf_size")]
    pub shelf_size: usize,
    #[serde(default = "default_label_width")]
    pub label_width: usize,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}
fn default_true() -> bool {
    true
}
fn default_shelf_size() -> usize {
    4
}
fn default_label_width() -> usize {
    22
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            low_quantity_threshold: default_threshold(),
            low_quantity_alert: default_true(),
            shelf_size: default_shelf_size(),
            label_width: default_label_width(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("medcabinet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".medcabinet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("medcabinet.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        debug!(path = %path.display(), "configuration loaded");
        if StrftimeItems::new(&cfg.date_format).any(|i| matches!(i, Item::Error)) {
            return Err(AppError::Config(format!(
                "invalid date_format '{}'",
                cfg.date_format
            )));
        }
        Ok(cfg.normalized())
    }

    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Write the defaults to `path`, creating the directory if needed.
    /// An existing file is left alone unless `force` is set.
    pub fn init_file(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(true)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn normalized(mut self) -> Self {
        self.shelf_size = self.shelf_size.max(1);
        self.label_width = self.label_width.max(12);
        self
    }
}
