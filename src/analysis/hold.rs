//! Hold-still drift analysis
//!
//! The user keeps a pointer on a fixed dot while its offset is sampled at a
//! steady rate. Drift is the mean offset magnitude; the magnitude series is
//! also run through the frequency estimator.

use serde::{Deserialize, Serialize};

use super::frequency::estimate_dominant_frequency;
use super::stats::mean;
use crate::error::{AnalysisError, Result};

/// Stability points lost per pixel of mean drift
pub const STABILITY_PENALTY_PER_PX: f64 = 40.0;

/// One sampled pointer offset from the hold target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoldSample {
    /// Sample time in milliseconds
    pub t: f64,
    pub dx: f64,
    pub dy: f64,
}

impl HoldSample {
    pub fn new(t: f64, dx: f64, dy: f64) -> Self {
        Self { t, dx, dy }
    }

    /// Offset magnitude in pixels
    pub fn magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Result of a hold-still test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoldMetrics {
    /// Mean offset magnitude (px)
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub mean_drift: f64,
    /// Dominant frequency of the offset magnitude (Hz)
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub dominant_frequency: f64,
    /// 0-100, higher is steadier
    pub stability: u32,
}

/// Analyze a hold-still recording
pub fn analyze_hold(samples: &[HoldSample]) -> Result<HoldMetrics> {
    if samples.is_empty() {
        tracing::warn!("No hold samples recorded");
        return Err(AnalysisError::insufficient("hold samples", 1, 0));
    }

    let magnitudes: Vec<f64> = samples.iter().map(HoldSample::magnitude).collect();
    let times: Vec<f64> = samples.iter().map(|s| s.t).collect();

    let mean_drift = mean(&magnitudes);
    let estimate = estimate_dominant_frequency(&magnitudes, &times);
    let stability = (100.0 - (mean_drift * STABILITY_PENALTY_PER_PX).round()).max(0.0) as u32;

    let metrics = HoldMetrics {
        mean_drift,
        dominant_frequency: estimate.dominant_frequency,
        stability,
    };
    tracing::debug!(samples = samples.len(), ?metrics, "Analyzed hold");
    Ok(metrics)
}
