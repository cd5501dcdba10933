//! Alternate-finger tapping
//!
//! The user taps two zones alternately, starting on the left. Taps on the
//! wrong side are recorded but do not advance the expected side. Speed,
//! rhythm irregularity and fatigue decay are computed from correct taps
//! only.

use serde::{Deserialize, Serialize};

use super::stats::standard_deviation;
use crate::error::{AnalysisError, Result};

/// Tap zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapSide {
    Left,
    Right,
}

impl TapSide {
    pub fn opposite(self) -> Self {
        match self {
            TapSide::Left => TapSide::Right,
            TapSide::Right => TapSide::Left,
        }
    }
}

/// A single recorded tap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tap {
    pub side: TapSide,
    /// Tap time in milliseconds
    pub t: f64,
    /// Whether the tap hit the expected side
    pub correct: bool,
}

/// Records taps while tracking which side is expected next
#[derive(Debug, Clone)]
pub struct TapSequence {
    taps: Vec<Tap>,
    expected: TapSide,
    wrong: usize,
}

impl Default for TapSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl TapSequence {
    pub fn new() -> Self {
        Self {
            taps: Vec::new(),
            expected: TapSide::Left,
            wrong: 0,
        }
    }

    /// Side the next correct tap must land on
    pub fn expected_side(&self) -> TapSide {
        self.expected
    }

    /// Record a tap at `t` milliseconds; returns whether it was correct
    pub fn record(&mut self, side: TapSide, t: f64) -> bool {
        let correct = side == self.expected;
        if correct {
            self.expected = self.expected.opposite();
        } else {
            self.wrong += 1;
        }
        self.taps.push(Tap { side, t, correct });
        correct
    }

    pub fn taps(&self) -> &[Tap] {
        &self.taps
    }

    pub fn wrong_count(&self) -> usize {
        self.wrong
    }

    /// Compute metrics over the recorded taps
    pub fn metrics(&self) -> Result<TappingMetrics> {
        tapping_metrics(&self.taps)
    }
}

/// Result of a tapping session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TappingMetrics {
    /// Number of correct taps
    pub taps: usize,
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub taps_per_sec: f64,
    /// Standard deviation of inter-tap intervals (s)
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub interval_std: f64,
    /// First-half rate minus second-half rate, rounded to 2 decimals
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub decay: f64,
    /// Taps on the wrong side
    pub wrong: usize,
}

/// Taps per second over a span, or `fallback` when the span is empty
fn half_rate(count: usize, start_ms: f64, end_ms: f64, fallback: f64) -> f64 {
    let secs = (end_ms - start_ms) / 1000.0;
    if count == 0 || secs <= 0.0 {
        fallback
    } else {
        count as f64 / secs
    }
}

/// Compute tapping metrics from recorded taps
///
/// Fails with [`AnalysisError::InsufficientInput`] if no tap was correct.
/// A session whose correct taps all share one timestamp is treated as
/// lasting one second, and a half with no elapsed time falls back to the
/// overall rate.
pub fn tapping_metrics(taps: &[Tap]) -> Result<TappingMetrics> {
    let wrong = taps.iter().filter(|t| !t.correct).count();
    let correct: Vec<f64> = taps.iter().filter(|t| t.correct).map(|t| t.t).collect();

    let (Some(&first), Some(&last)) = (correct.first(), correct.last()) else {
        tracing::warn!(wrong, "No valid alternated taps recorded");
        return Err(AnalysisError::insufficient("correct taps", 1, 0));
    };

    let n = correct.len();
    let total_secs = match (last - first) / 1000.0 {
        secs if secs == 0.0 => 1.0,
        secs => secs,
    };
    let taps_per_sec = n as f64 / total_secs;

    let intervals: Vec<f64> = correct.windows(2).map(|w| (w[1] - w[0]) / 1000.0).collect();
    let interval_std = standard_deviation(&intervals);

    let mid = n / 2;
    let first_rate = half_rate(mid, first, correct[mid.saturating_sub(1)], taps_per_sec);
    let second_rate = half_rate(n - mid, correct[mid], last, taps_per_sec);
    let decay = ((first_rate - second_rate) * 100.0).round() / 100.0;

    Ok(TappingMetrics {
        taps: n,
        taps_per_sec,
        interval_std,
        decay,
        wrong,
    })
}
