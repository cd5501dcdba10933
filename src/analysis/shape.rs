//! Circle drawing and repetition scoring
//!
//! Scores repeated hand-drawn circles two ways:
//! - [`circularity`] of a single stroke around its own centroid, and the
//!   per-stroke quality/decay summary built on it
//! - [`score_repetition_against_targets`], which matches each stroke to the
//!   closest of a set of displayed target circles

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::stats::{mean, standard_deviation};
use crate::error::{AnalysisError, Result};
use crate::types::{centroid, Point, TargetCircle};

/// Strokes need more than this many points to be counted
pub const MIN_STROKE_POINTS: usize = 8;

/// `max(0, x)` that keeps NaN instead of hiding it as 0
fn non_negative(x: f64) -> f64 {
    if x.is_nan() {
        x
    } else {
        x.max(0.0)
    }
}

/// Whether a stroke has enough points to be scored
pub fn is_countable_stroke(stroke: &[Point]) -> bool {
    stroke.len() > MIN_STROKE_POINTS
}

/// How circular a point set is, in [0, 1]
///
/// Computes the radius of each point from the centroid and returns
/// `max(0, 1 - std(radii) / mean(radii))`. Empty input and a zero mean
/// radius give 0; a NaN coordinate gives NaN.
pub fn circularity(points: &[Point]) -> f64 {
    let Some(center) = centroid(points) else {
        return 0.0;
    };
    let radii: Vec<f64> = points.iter().map(|p| p.distance(&center)).collect();
    let mean_radius = mean(&radii);
    if mean_radius == 0.0 {
        return 0.0;
    }
    non_negative(1.0 - standard_deviation(&radii) / mean_radius)
}

/// Accuracy (0-100) of a stroke traced over a target circle
///
/// Mean absolute error between each point's distance to the center and the
/// target radius, normalized by the radius.
pub fn stroke_accuracy(stroke: &[Point], target: &TargetCircle) -> f64 {
    if stroke.is_empty() || target.radius <= 0.0 {
        return 0.0;
    }
    let mae = stroke
        .iter()
        .map(|p| (p.distance(&target.center) - target.radius).abs())
        .sum::<f64>()
        / stroke.len() as f64;
    non_negative(1.0 - mae / target.radius) * 100.0
}

/// Outcome of matching strokes to target circles
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RepetitionScore {
    /// Best accuracy (0-100) seen per traced target index
    #[serde(deserialize_with = "crate::analysis::nan_serde::map_or_nan")]
    pub per_target_best_accuracy: BTreeMap<usize, f64>,
    /// Targets with at least one assigned stroke
    pub traced_count: usize,
    /// Targets with no assigned stroke
    pub missed_count: usize,
    /// Mean best accuracy over traced targets, 0 if none
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub avg_accuracy: f64,
}

/// Match each stroke to its best target and summarize per target
///
/// Assignment is greedy and independent per stroke, so a target can collect
/// several candidate strokes; only its best accuracy is kept. Strokes that
/// are not countable are ignored, as are targets with a non-positive radius.
pub fn score_repetition_against_targets(
    strokes: &[Vec<Point>],
    targets: &[TargetCircle],
) -> RepetitionScore {
    let mut best: BTreeMap<usize, f64> = BTreeMap::new();

    for stroke in strokes.iter().filter(|s| is_countable_stroke(s)) {
        let assigned = targets
            .iter()
            .enumerate()
            .filter(|(_, t)| t.radius > 0.0)
            .map(|(i, t)| (i, stroke_accuracy(stroke, t)))
            .fold(None, |acc: Option<(usize, f64)>, (i, a)| match acc {
                Some((_, best_a)) if best_a >= a => acc,
                _ => Some((i, a)),
            });

        if let Some((index, accuracy)) = assigned {
            let entry = best.entry(index).or_insert(accuracy);
            if accuracy > *entry {
                *entry = accuracy;
            }
        }
    }

    let traced_count = best.len();
    let avg_accuracy = if traced_count > 0 {
        best.values().sum::<f64>() / traced_count as f64
    } else {
        0.0
    };

    tracing::debug!(
        strokes = strokes.len(),
        targets = targets.len(),
        traced_count,
        avg_accuracy,
        "Scored repetition against targets"
    );

    RepetitionScore {
        per_target_best_accuracy: best,
        traced_count,
        missed_count: targets.len() - traced_count,
        avg_accuracy,
    }
}

/// Circularity summary of a timed repetition session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepetitionQuality {
    /// Circularity of each countable stroke, in drawing order
    #[serde(deserialize_with = "crate::analysis::nan_serde::vec_or_nan")]
    pub qualities: Vec<f64>,
    /// Mean circularity
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub avg_quality: f64,
    /// Mean of the first half minus mean of the second half
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub decay: f64,
}

/// Per-stroke circularity with fatigue decay between session halves
///
/// With an odd stroke count the middle stroke belongs to both halves.
pub fn repetition_quality(strokes: &[Vec<Point>]) -> Result<RepetitionQuality> {
    let qualities: Vec<f64> = strokes
        .iter()
        .filter(|s| is_countable_stroke(s))
        .map(|s| circularity(s))
        .collect();

    if qualities.is_empty() {
        tracing::warn!(strokes = strokes.len(), "No countable circles drawn");
        return Err(AnalysisError::insufficient(
            "repetition strokes",
            1,
            qualities.len(),
        ));
    }

    let n = qualities.len();
    let first = &qualities[..n.div_ceil(2)];
    let last = &qualities[n / 2..];

    Ok(RepetitionQuality {
        avg_quality: mean(&qualities),
        decay: mean(first) - mean(last),
        qualities,
    })
}
