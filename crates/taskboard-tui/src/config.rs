/*
[INPUT]:  YAML configuration file (optional)
[OUTPUT]: Parsed board configuration and the seeded TaskStore
[POS]:    Configuration layer - startup settings for the board
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use taskboard_core::{DueDate, Priority, TaskInput, TaskStore};
use tracing::debug;

/// Top-level configuration for the board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardConfig {
    /// Snackbar behaviour
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Tasks present at startup; omit the key for the built-in sample task
    #[serde(default = "default_seed_tasks")]
    pub seed_tasks: Vec<TaskInput>,
    /// Directory for the rolling log file
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

/// Snackbar configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// Seconds before an outcome message is dismissed
    #[serde(default = "default_auto_hide_secs")]
    pub auto_hide_secs: u64,
    /// Maximum messages stacked at once
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl NotificationConfig {
    pub fn auto_hide(&self) -> Duration {
        Duration::from_secs(self.auto_hide_secs)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_hide_secs: default_auto_hide_secs(),
            max_visible: default_max_visible(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            notifications: NotificationConfig::default(),
            seed_tasks: default_seed_tasks(),
            log_dir: None,
        }
    }
}

fn default_auto_hide_secs() -> u64 {
    taskboard_core::event::DEFAULT_AUTO_HIDE.as_secs()
}

fn default_max_visible() -> usize {
    5
}

fn default_seed_tasks() -> Vec<TaskInput> {
    vec![TaskInput::new(
        "Task01",
        "Description01",
        DueDate::today(),
        Priority::Low,
    )]
}

impl BoardConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load an explicit config file, else the per-user one if present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Build the initial store; seeds go through the same validation as user input.
    pub fn build_store(&self) -> Result<TaskStore> {
        TaskStore::with_seed(self.seed_tasks.iter().cloned()).context("seed tasks from config")
    }

    /// Log directory from config, falling back to the per-user data directory.
    pub fn resolve_log_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.log_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("taskboard").join("logs"))
            .ok_or_else(|| anyhow!("Could not determine data directory"))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskboard").join("config.yaml"))
}
