//! Dominant frequency estimation
//!
//! Provides frequency domain analysis for captured motion series:
//! - Sampling rate estimation from millisecond timestamps
//! - Discrete Fourier transform magnitude scan over the positive bins
//! - Dominant (peak) frequency and its magnitude
//!
//! The default method is a direct DFT evaluated bin by bin, O(n²) in the
//! number of samples. Captures are a few hundred samples long.
//! [`FrequencyMethod::Fft`] computes the same bins with `rustfft`; its
//! rounding differs slightly from the direct sum.

use rustfft::{num_complex::Complex, FftPlanner};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// How the bin magnitudes are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyMethod {
    /// Direct O(n²) discrete Fourier transform
    #[default]
    Dft,
    /// Fast Fourier transform via rustfft (not bit-identical to `Dft`)
    Fft,
}

impl FrequencyMethod {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FrequencyMethod::Dft => "Direct DFT",
            FrequencyMethod::Fft => "FFT",
        }
    }
}

/// Dominant frequency of a sample series
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrequencyEstimate {
    /// Frequency of the strongest bin (Hz), 0 if no bin has power
    pub dominant_frequency: f64,
    /// Magnitude of the strongest bin, 0 if none
    pub power: f64,
}

impl FrequencyEstimate {
    /// Width of one frequency bin (Hz) for `n` samples at `sample_rate` Hz
    pub fn bin_width(sample_rate: f64, n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        sample_rate / n as f64
    }
}

/// Magnitude spectrum over bins `1..floor(n/2)`
#[derive(Debug, Clone, Default)]
pub struct Spectrum {
    /// Frequency of each bin (Hz)
    pub frequencies: Vec<f64>,
    /// DFT magnitude of each bin (unnormalized)
    pub magnitudes: Vec<f64>,
    /// Sample rate used for computation
    pub sample_rate: f64,
    /// Number of samples used
    pub sample_count: usize,
}

impl Spectrum {
    /// Strongest bin as a frequency estimate
    ///
    /// The first bin wins on ties, and only bins with strictly positive
    /// magnitude count.
    pub fn peak(&self) -> FrequencyEstimate {
        let mut best: Option<(usize, f64)> = None;
        for (i, &mag) in self.magnitudes.iter().enumerate() {
            let current = best.map_or(0.0, |(_, m)| m);
            if mag > current {
                best = Some((i, mag));
            }
        }

        match best {
            Some((i, power)) => {
                let freq = self.frequencies[i];
                FrequencyEstimate {
                    dominant_frequency: if freq.is_finite() { freq } else { 0.0 },
                    power,
                }
            }
            None => FrequencyEstimate::default(),
        }
    }

    /// Frequency resolution (Hz per bin)
    pub fn frequency_resolution(&self) -> f64 {
        FrequencyEstimate::bin_width(self.sample_rate, self.sample_count)
    }

    /// Data points for plotting (frequency, magnitude pairs)
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.frequencies
            .iter()
            .zip(self.magnitudes.iter())
            .map(|(&f, &m)| [f, m])
            .collect()
    }
}

/// Sampling rate (Hz) implied by millisecond timestamps
///
/// Uses the mean of consecutive differences. Returns 0 when fewer than two
/// timestamps are given or the mean interval is not positive.
pub fn sample_rate_hz(timestamps: &[f64]) -> f64 {
    if timestamps.len() < 2 {
        return 0.0;
    }
    let dt_sum: f64 = timestamps.windows(2).map(|w| w[1] - w[0]).sum();
    let dt = dt_sum / (timestamps.len() - 1) as f64 / 1000.0;
    if dt > 0.0 {
        1.0 / dt
    } else {
        0.0
    }
}

/// DFT magnitude of `samples` at bin `k`
pub fn dft_magnitude(samples: &[f64], k: usize) -> f64 {
    let n = samples.len() as f64;
    let (re, im) = samples
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(re, im), (j, &s)| {
            let angle = -2.0 * PI * k as f64 * j as f64 / n;
            (re + s * angle.cos(), im + s * angle.sin())
        });
    (re * re + im * im).sqrt()
}

/// Estimate the dominant frequency of a sample series with the direct DFT
///
/// `timestamps` are in milliseconds and must match `samples` in length.
/// Series too short to have any bin (n < 4), all-zero series, and series
/// with unusable timestamps yield a zero estimate.
pub fn estimate_dominant_frequency(samples: &[f64], timestamps: &[f64]) -> FrequencyEstimate {
    FrequencyEstimator::new().estimate(samples, timestamps)
}

/// Frequency estimator with a selectable bin computation method
pub struct FrequencyEstimator {
    planner: FftPlanner<f64>,
    method: FrequencyMethod,
}

impl FrequencyEstimator {
    /// Create an estimator using the direct DFT
    pub fn new() -> Self {
        Self::with_method(FrequencyMethod::Dft)
    }

    /// Create an estimator with a specific method
    pub fn with_method(method: FrequencyMethod) -> Self {
        Self {
            planner: FftPlanner::new(),
            method,
        }
    }

    /// Get current method
    pub fn method(&self) -> FrequencyMethod {
        self.method
    }

    /// Compute the magnitude spectrum over bins `1..floor(n/2)`
    pub fn spectrum(&mut self, samples: &[f64], timestamps: &[f64]) -> Spectrum {
        let n = samples.len();
        let sample_rate = sample_rate_hz(timestamps);
        let bins = 1..n / 2;

        let magnitudes: Vec<f64> = if bins.is_empty() {
            Vec::new()
        } else {
            match self.method {
                FrequencyMethod::Dft => bins.clone().map(|k| dft_magnitude(samples, k)).collect(),
                FrequencyMethod::Fft => {
                    let mut buffer: Vec<Complex<f64>> =
                        samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
                    let fft = self.planner.plan_fft_forward(n);
                    fft.process(&mut buffer);
                    buffer[bins.clone()].iter().map(|c| c.norm()).collect()
                }
            }
        };

        let resolution = FrequencyEstimate::bin_width(sample_rate, n);
        let frequencies = bins.map(|k| k as f64 * resolution).collect();

        Spectrum {
            frequencies,
            magnitudes,
            sample_rate,
            sample_count: n,
        }
    }

    /// Estimate the dominant frequency and its power
    pub fn estimate(&mut self, samples: &[f64], timestamps: &[f64]) -> FrequencyEstimate {
        let estimate = self.spectrum(samples, timestamps).peak();
        tracing::debug!(
            n = samples.len(),
            method = self.method.display_name(),
            frequency = estimate.dominant_frequency,
            power = estimate.power,
            "Estimated dominant frequency"
        );
        estimate
    }
}

impl Default for FrequencyEstimator {
    fn default() -> Self {
        Self::new()
    }
}
