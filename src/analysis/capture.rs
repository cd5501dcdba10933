//! Motion capture summary
//!
//! Summarizes a device-motion capture: duration, average amplitude, the
//! dominant frequency from [`super::frequency`], and a tremor verdict from a
//! frequency band plus amplitude floor.

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyEstimator;
use super::stats::mean;
use crate::config::CaptureConfig;
use crate::error::{AnalysisError, Result};
use crate::types::SampleSeries;

/// Summary of one motion capture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureSummary {
    /// Seconds between the first and last sample
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub duration_secs: f64,
    /// Mean acceleration magnitude
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub avg_amplitude: f64,
    /// Dominant frequency (Hz)
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub dominant_frequency: f64,
    /// Magnitude of the dominant bin
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub power: f64,
    /// Whether the capture falls inside the tremor band with enough amplitude
    pub tremor_detected: bool,
}

/// Summarize a capture using the configured thresholds
///
/// Fails with [`AnalysisError::InsufficientInput`] when the series has fewer
/// than `config.min_samples` samples.
pub fn summarize_capture(series: &SampleSeries, config: &CaptureConfig) -> Result<CaptureSummary> {
    if series.len() < config.min_samples {
        tracing::warn!(
            samples = series.len(),
            required = config.min_samples,
            "Insufficient capture data"
        );
        return Err(AnalysisError::insufficient(
            "motion capture",
            config.min_samples,
            series.len(),
        ));
    }

    let estimate = FrequencyEstimator::with_method(config.frequency_method)
        .estimate(series.samples(), series.timestamps());
    let avg_amplitude = mean(series.samples());
    let tremor_detected = config.is_tremor(estimate.dominant_frequency, avg_amplitude);

    let summary = CaptureSummary {
        duration_secs: series.duration_secs(),
        avg_amplitude,
        dominant_frequency: estimate.dominant_frequency,
        power: estimate.power,
        tremor_detected,
    };
    tracing::debug!(?summary, "Summarized capture");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine_series(freq: f64, amplitude: f64, fs: f64, secs: f64) -> SampleSeries {
        let n = (fs * secs) as usize;
        let samples = (0..n)
            .map(|i| amplitude * (2.0 * PI * freq * i as f64 / fs).sin())
            .collect();
        let timestamps = (0..n).map(|i| i as f64 * 1000.0 / fs).collect();
        SampleSeries::new(samples, timestamps).unwrap()
    }

    #[test]
    fn test_tremor_band_detected() {
        // Offset keeps the mean amplitude above the floor
        let base = sine_series(5.0, 0.3, 60.0, 8.0);
        let (samples, timestamps) = base.into_parts();
        let shifted = samples.into_iter().map(|s| s + 0.2).collect();
        let series = SampleSeries::new(shifted, timestamps).unwrap();

        let summary = summarize_capture(&series, &CaptureConfig::default()).unwrap();
        assert!((summary.dominant_frequency - 5.0).abs() < 0.2);
        assert!((summary.avg_amplitude - 0.2).abs() < 1e-6);
        assert!(summary.tremor_detected);
        assert!((summary.duration_secs - 479.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_band_not_detected() {
        let base = sine_series(12.0, 0.3, 60.0, 8.0);
        let (samples, timestamps) = base.into_parts();
        let shifted = samples.into_iter().map(|s| s + 0.2).collect();
        let series = SampleSeries::new(shifted, timestamps).unwrap();

        let summary = summarize_capture(&series, &CaptureConfig::default()).unwrap();
        assert!(!summary.tremor_detected);
    }

    #[test]
    fn test_low_amplitude_not_detected() {
        // Zero-mean sine: amplitude floor rejects it even in band
        let series = sine_series(5.0, 0.3, 60.0, 8.0);
        let summary = summarize_capture(&series, &CaptureConfig::default()).unwrap();
        assert!(summary.avg_amplitude.abs() < 0.05);
        assert!(!summary.tremor_detected);
    }

    #[test]
    fn test_insufficient_samples() {
        let series = SampleSeries::new(vec![0.1, 0.2, 0.3], vec![0.0, 16.0, 33.0]).unwrap();
        let err = summarize_capture(&series, &CaptureConfig::default()).unwrap_err();
        assert!(err.is_retryable());
    }
}
