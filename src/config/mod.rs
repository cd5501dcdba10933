//! Configuration module for tremor-check
//!
//! This module handles the settings that shape an assessment session:
//! - Capture thresholds (minimum samples, tremor band, amplitude floor)
//! - Reference guide geometry (spiral and line guides)
//! - Synthetic capture parameters used by the demo and tests
//!
//! Scoring calibration constants (match radius, weights, severity
//! thresholds) are not configurable; they live as constants next to the
//! analyzers that use them.
//!
//! # Config Location
//!
//! The default config file lives in the platform config directory under
//! `dev.tremor-check`:
//!
//! - **Linux**: `~/.config/dev.tremor-check/config.toml`
//! - **macOS**: `~/Library/Application Support/dev.tremor-check/config.toml`
//! - **Windows**: `%APPDATA%\dev.tremor-check\config.toml`
//!
//! # Example
//!
//! ```ignore
//! use tremor_check::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::load_or_default(AnalysisConfig::default_path()?);
//! let summary = summarize_capture(&series, &config.capture)?;
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::analysis::frequency::FrequencyMethod;
use crate::error::{AnalysisError, Result, ResultExt};
use crate::reference::{LineGuide, SpiralGuide};
use crate::simulate::SimulationConfig;

/// Application identifier for config directories
pub const APP_ID: &str = "dev.tremor-check";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Default minimum samples for a capture summary
pub const DEFAULT_MIN_SAMPLES: usize = 4;

/// Default lower edge of the tremor band (Hz)
pub const DEFAULT_TREMOR_BAND_LOW_HZ: f64 = 3.0;

/// Default upper edge of the tremor band (Hz)
pub const DEFAULT_TREMOR_BAND_HIGH_HZ: f64 = 7.0;

/// Default mean amplitude a capture must exceed to count as tremor
pub const DEFAULT_MIN_AVG_AMPLITUDE: f64 = 0.05;

/// Default capture window in seconds
pub const DEFAULT_CAPTURE_SECS: f64 = 10.0;

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID))
}

// ==================== Capture Config ====================

/// Thresholds for summarizing a motion capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Captures with fewer samples are rejected as insufficient
    #[serde(default = "default_min_samples")]
    pub min_samples: usize,

    /// Lower edge of the tremor band (Hz, inclusive)
    #[serde(default = "default_band_low")]
    pub tremor_band_low_hz: f64,

    /// Upper edge of the tremor band (Hz, inclusive)
    #[serde(default = "default_band_high")]
    pub tremor_band_high_hz: f64,

    /// Mean amplitude must exceed this for a tremor verdict
    #[serde(default = "default_min_amplitude")]
    pub min_avg_amplitude: f64,

    /// How long the caller should capture before analyzing (seconds)
    #[serde(default = "default_capture_secs")]
    pub capture_secs: f64,

    /// Bin computation for the frequency estimate
    #[serde(default)]
    pub frequency_method: FrequencyMethod,
}

fn default_min_samples() -> usize {
    DEFAULT_MIN_SAMPLES
}

fn default_band_low() -> f64 {
    DEFAULT_TREMOR_BAND_LOW_HZ
}

fn default_band_high() -> f64 {
    DEFAULT_TREMOR_BAND_HIGH_HZ
}

fn default_min_amplitude() -> f64 {
    DEFAULT_MIN_AVG_AMPLITUDE
}

fn default_capture_secs() -> f64 {
    DEFAULT_CAPTURE_SECS
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            min_samples: DEFAULT_MIN_SAMPLES,
            tremor_band_low_hz: DEFAULT_TREMOR_BAND_LOW_HZ,
            tremor_band_high_hz: DEFAULT_TREMOR_BAND_HIGH_HZ,
            min_avg_amplitude: DEFAULT_MIN_AVG_AMPLITUDE,
            capture_secs: DEFAULT_CAPTURE_SECS,
            frequency_method: FrequencyMethod::Dft,
        }
    }
}

impl CaptureConfig {
    /// Tremor heuristic: frequency inside the band and amplitude above the floor
    pub fn is_tremor(&self, dominant_frequency: f64, avg_amplitude: f64) -> bool {
        dominant_frequency >= self.tremor_band_low_hz
            && dominant_frequency <= self.tremor_band_high_hz
            && avg_amplitude > self.min_avg_amplitude
    }
}

// ==================== Analysis Config ====================

/// Complete configuration for an assessment session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub capture: CaptureConfig,

    #[serde(default)]
    pub spiral: SpiralGuide,

    #[serde(default)]
    pub line: LineGuide,

    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl AnalysisConfig {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        config_dir()
            .map(|p| p.join(CONFIG_FILE))
            .ok_or_else(|| AnalysisError::Config("Could not determine config directory".into()))
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| AnalysisError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(AnalysisError::from)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_toml(&content)
    }

    /// Load a config file, returning defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save config to disk as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(AnalysisError::from)
                .context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AnalysisError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(AnalysisError::from)
            .with_context(|| format!("Failed to write config file {:?}", path))
    }

    /// Reject settings no analyzer can work with
    pub fn validate(&self) -> Result<()> {
        let capture = &self.capture;
        if capture.min_samples < 2 {
            return Err(AnalysisError::Config(format!(
                "capture.min_samples must be at least 2, got {}",
                capture.min_samples
            )));
        }
        if capture.tremor_band_low_hz > capture.tremor_band_high_hz {
            return Err(AnalysisError::Config(format!(
                "tremor band is inverted: {} Hz > {} Hz",
                capture.tremor_band_low_hz, capture.tremor_band_high_hz
            )));
        }
        if capture.capture_secs <= 0.0 {
            return Err(AnalysisError::Config(format!(
                "capture.capture_secs must be positive, got {}",
                capture.capture_secs
            )));
        }
        if self.spiral.points < 2 {
            return Err(AnalysisError::Config(
                "spiral.points must be at least 2".to_string(),
            ));
        }
        if self.line.step <= 0.0 {
            return Err(AnalysisError::Config(
                "line.step must be positive".to_string(),
            ));
        }
        if self.simulation.sample_rate_hz <= 0.0 {
            return Err(AnalysisError::Config(
                "simulation.sample_rate_hz must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
