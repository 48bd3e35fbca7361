//! Wizard settings, optionally read from a TOML file.

use crate::state_manager::STORAGE_KEY;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "aerial-signup.toml";

/// Upper bound for every configured interval (one day).
pub const MAX_INTERVAL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Key the record is stored under.
    pub storage_key: String,
    pub error_toast_secs: u64,
    pub success_toast_secs: u64,
    /// The completion summary closes itself after this long.
    pub completion_close_secs: u64,
    pub departments: Vec<String>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            error_toast_secs: 5,
            success_toast_secs: 3,
            completion_close_secs: 10,
            departments: ["Operations", "Engineering", "Sales", "Support", "Management"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

fn interval(secs: u64) -> Duration {
    Duration::from_secs(secs.min(MAX_INTERVAL_SECS))
}

impl WizardConfig {
    pub fn error_toast(&self) -> Duration {
        interval(self.error_toast_secs)
    }

    pub fn success_toast(&self) -> Duration {
        interval(self.success_toast_secs)
    }

    pub fn completion_close(&self) -> Duration {
        interval(self.completion_close_secs)
    }

    pub fn parse(toml_text: &str) -> Result<Self> {
        toml::from_str(toml_text).context("failed to parse wizard config TOML")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Use `explicit` if given, else `<data_dir>/aerial-signup.toml` when it
    /// exists, else defaults.
    pub fn resolve(explicit: Option<&Path>, data_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let candidate: PathBuf = data_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            log::info!("Using config {}", candidate.display());
            return Self::from_file(&candidate);
        }
        Ok(Self::default())
    }
}
