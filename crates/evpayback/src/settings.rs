//! User preferences stored as YAML in the data directory.
//!
//! Every field has a default, so a partial or missing `config.yaml` is fine.
//! A file that fails to parse is logged and replaced by defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use evpayback_core::config::SweepSettings;

const SETTINGS_FILE: &str = "config.yaml";

#[derive(Debug)]
pub enum SettingsError {
    Io(String),
    Serialize(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "IO error: {}", msg),
            SettingsError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

fn default_share_base_url() -> String {
    "http://localhost:8000/".to_string()
}

fn default_payback_cap() -> f64 {
    SweepSettings::default().payback_cap
}

fn default_horizon_years() -> u32 {
    SweepSettings::default().horizon_years
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Pair used when none is requested or the requested one is unknown
    #[serde(default)]
    pub default_pair: Option<String>,
    /// Page that share links point at
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
    /// Catalog file; relative paths are resolved against the data directory
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Paybacks above this many years are displayed as `>cap`
    #[serde(default = "default_payback_cap")]
    pub payback_cap: f64,
    /// Last year of the cumulative projection
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_pair: None,
            share_base_url: default_share_base_url(),
            catalog_path: None,
            payback_cap: default_payback_cap(),
            horizon_years: default_horizon_years(),
        }
    }
}

impl Settings {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE)
    }

    /// Load settings from file, returning defaults if the file doesn't exist or fails to parse.
    ///
    /// The payback cap and projection horizon are clamped into usable ranges.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read settings, using defaults"
                );
                return Self::default();
            }
        };

        match serde_saphyr::from_str::<Self>(&content) {
            Ok(settings) => settings.clamped(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to parse settings, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Copy with the cap and horizon clamped the way the sweeps clamp them
    #[must_use]
    pub fn clamped(self) -> Self {
        let sweep = self.sweep_settings();
        if sweep.payback_cap != self.payback_cap || sweep.horizon_years != self.horizon_years {
            tracing::warn!(
                payback_cap = self.payback_cap,
                horizon_years = self.horizon_years,
                "Adjusting out-of-range settings"
            );
        }
        Self {
            payback_cap: sweep.payback_cap,
            horizon_years: sweep.horizon_years,
            ..self
        }
    }

    /// Save settings to file.
    pub fn save(&self, data_dir: &Path) -> Result<(), SettingsError> {
        let yaml = serde_saphyr::to_string(self).map_err(|e| {
            SettingsError::Serialize(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::create_dir_all(data_dir)
            .and_then(|()| std::fs::write(Self::path(data_dir), yaml))
            .map_err(|e| SettingsError::Io(format!("Failed to write settings: {}", e)))
    }

    /// Catalog location: the configured path, else `pairs.json` in the data directory
    pub fn catalog_path(&self, data_dir: &Path) -> PathBuf {
        match &self.catalog_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => data_dir.join(path),
            None => data_dir.join("pairs.json"),
        }
    }

    /// Sweep settings with the configured cap and horizon, clamped
    pub fn sweep_settings(&self) -> SweepSettings {
        SweepSettings {
            payback_cap: self.payback_cap,
            horizon_years: self.horizon_years,
            ..SweepSettings::default()
        }
        .clamped()
    }
}
