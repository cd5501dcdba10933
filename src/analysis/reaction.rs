//! Target reaction summary
//!
//! Targets appear at random times and expire after a fixed lifetime. The
//! caller records the reaction time of each hit and counts expirations.

use serde::{Deserialize, Serialize};

use super::stats::mean;
use crate::error::{AnalysisError, Result};

/// Result of a target reaction session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionMetrics {
    /// Reaction time of each hit (ms), in hit order
    #[serde(deserialize_with = "crate::analysis::nan_serde::vec_or_nan")]
    pub reaction_times: Vec<f64>,
    /// Mean reaction time (ms), 0 with no hits
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub mean_reaction_ms: f64,
    pub hits: usize,
    pub misses: usize,
    /// round(misses / trials * 100)
    pub miss_rate_percent: u32,
}

/// Summarize reaction times and misses over `trials` spawned targets
pub fn summarize_reactions(
    reaction_times_ms: &[f64],
    misses: usize,
    trials: usize,
) -> Result<ReactionMetrics> {
    if trials == 0 {
        return Err(AnalysisError::insufficient("target trials", 1, 0));
    }

    Ok(ReactionMetrics {
        reaction_times: reaction_times_ms.to_vec(),
        mean_reaction_ms: mean(reaction_times_ms),
        hits: reaction_times_ms.len(),
        misses,
        miss_rate_percent: (misses as f64 / trials as f64 * 100.0).round() as u32,
    })
}
