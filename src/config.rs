use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::DEFAULT_CHART_COLORS;
use crate::data::ChartKind;

/// Environment variable overriding the settings file location.
pub const CONFIG_ENV: &str = "RUSTY_CHART_CONFIG";

// ---------------------------------------------------------------------------
// User settings
// ---------------------------------------------------------------------------

/// Viewer settings, read from a JSON file. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Colour tokens cycled over the Y series.
    pub chart_colors: Vec<String>,
    /// Chart kind selected at start-up.
    pub default_chart_kind: ChartKind,
    /// Uploads above this size are rejected.
    pub max_file_size_mb: u64,
    /// File stem suggested for exports.
    pub export_filename: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chart_colors: DEFAULT_CHART_COLORS.iter().map(|c| c.to_string()).collect(),
            default_chart_kind: ChartKind::Bar,
            max_file_size_mb: 50,
            export_filename: "csv-data-chart".to_string(),
        }
    }
}

impl Settings {
    /// Read settings from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        serde_json::from_str(&text).context("parsing settings JSON")
    }

    /// Settings from the default location. A missing file gives defaults; a
    /// broken one is logged and ignored.
    pub fn load_or_default() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            log::debug!("no settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => {
                log::info!("loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("ignoring settings: {e:#}");
                Self::default()
            }
        }
    }
}

/// `$RUSTY_CHART_CONFIG`, else `<config dir>/rusty-chart/settings.json`.
pub fn settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("rusty-chart").join("settings.json"))
}
