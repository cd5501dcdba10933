//! Synthetic capture sources
//!
//! Stand-ins for a device-motion sensor and a drawing surface, used by the
//! demo binary and by tests. Generators are seeded so that runs are
//! reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::Result;
use crate::types::{Point, SampleSeries};

/// Parameters for a simulated tremor capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_sample_rate")]
    pub sample_rate_hz: f64,
    #[serde(default = "default_duration")]
    pub duration_secs: f64,
    /// Frequency of the generating sine (Hz)
    #[serde(default = "default_frequency")]
    pub frequency_hz: f64,
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Peak-to-peak width of the uniform noise
    #[serde(default = "default_noise")]
    pub noise: f64,
    /// Take the absolute value of the sine, like an acceleration magnitude.
    /// This doubles the fundamental frequency of the signal.
    #[serde(default = "default_rectify")]
    pub rectify: bool,
    /// Timestamp of the first sample (ms)
    #[serde(default)]
    pub start_ms: f64,
}

fn default_sample_rate() -> f64 {
    60.0
}

fn default_duration() -> f64 {
    8.0
}

fn default_frequency() -> f64 {
    5.0
}

fn default_amplitude() -> f64 {
    0.6
}

fn default_noise() -> f64 {
    0.05
}

fn default_rectify() -> bool {
    true
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: default_sample_rate(),
            duration_secs: default_duration(),
            frequency_hz: default_frequency(),
            amplitude: default_amplitude(),
            noise: default_noise(),
            rectify: default_rectify(),
            start_ms: 0.0,
        }
    }
}

impl SimulationConfig {
    /// Same generator over a different capture window
    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Number of samples the capture will contain
    pub fn sample_count(&self) -> usize {
        (self.sample_rate_hz * self.duration_secs).max(0.0) as usize
    }
}

/// Generate a noisy sine capture
pub fn simulate_capture(config: &SimulationConfig, seed: u64) -> Result<SampleSeries> {
    let mut rng = StdRng::seed_from_u64(seed);
    let fs = config.sample_rate_hz;

    let (samples, timestamps): (Vec<f64>, Vec<f64>) = (0..config.sample_count())
        .map(|i| {
            let t = i as f64 / fs;
            let wave = (2.0 * PI * config.frequency_hz * t).sin();
            let wave = if config.rectify { wave.abs() } else { wave };
            let noise = (rng.random::<f64>() - 0.5) * config.noise;
            (
                config.amplitude * wave + noise,
                config.start_ms + i as f64 * (1000.0 / fs),
            )
        })
        .unzip();

    tracing::debug!(samples = samples.len(), seed, "Simulated capture");
    SampleSeries::new(samples, timestamps)
}

/// Perturb a reference path with uniform jitter to mimic a hand-drawn trace
///
/// Each point moves by up to `jitter` pixels on each axis and is stamped
/// `interval_ms` after the previous one.
pub fn simulate_trace(reference: &[Point], jitter: f64, interval_ms: f64, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    reference
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let dx = (rng.random::<f64>() * 2.0 - 1.0) * jitter;
            let dy = (rng.random::<f64>() * 2.0 - 1.0) * jitter;
            Point::timed(p.x + dx, p.y + dy, i as f64 * interval_ms)
        })
        .collect()
}
