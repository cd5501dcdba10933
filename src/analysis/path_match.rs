//! Spiral trace scoring
//!
//! Compares a user-drawn path against a generated reference path (usually an
//! Archimedean spiral) by nearest-point matching. Every reference point is
//! matched to its closest drawn point; reference points with a drawn point
//! inside the match radius count as covered.
//!
//! The weights and thresholds below are calibration constants.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::types::{nearest_distance, Point};

/// Lower bound for the match radius, in canvas pixels
pub const MIN_MATCH_RADIUS: f64 = 12.0;

/// Match radius as a fraction of the shorter canvas side
pub const MATCH_RADIUS_FRACTION: f64 = 0.06;

/// Drawn paths shorter than this are penalized as sparse strokes
pub const MIN_DRAWN_POINTS: usize = 30;

/// Scale applied on top of the proportional sparse-stroke penalty
pub const SPARSE_PENALTY_FACTOR: f64 = 0.5;

/// Weight of coverage in the raw score
pub const COVERAGE_WEIGHT: f64 = 0.7;

/// Weight of (1 - normalized distance) in the raw score
pub const DISTANCE_WEIGHT: f64 = 0.3;

/// Severity scores above this are `High`
pub const HIGH_SEVERITY_THRESHOLD: u32 = 60;

/// Severity scores above this (and not high) are `Medium`
pub const MEDIUM_SEVERITY_THRESHOLD: u32 = 30;

/// Severity bucket derived from the severity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Bucket a 0-100 severity score
    pub fn from_score(score: u32) -> Self {
        if score > HIGH_SEVERITY_THRESHOLD {
            Severity::High
        } else if score > MEDIUM_SEVERITY_THRESHOLD {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// How strongly this severity suggests a tremor
    pub fn tremor_likelihood(&self) -> TremorLikelihood {
        match self {
            Severity::High => TremorLikelihood::Likely,
            Severity::Medium => TremorLikelihood::Possible,
            Severity::Low => TremorLikelihood::NotClear,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse tremor verdict shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TremorLikelihood {
    Likely,
    Possible,
    NotClear,
}

impl TremorLikelihood {
    pub fn label(&self) -> &'static str {
        match self {
            TremorLikelihood::Likely => "Likely",
            TremorLikelihood::Possible => "Possible",
            TremorLikelihood::NotClear => "Not Clear",
        }
    }
}

impl std::fmt::Display for TremorLikelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of matching a drawn path against a reference path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathMatchScore {
    /// Fraction of reference points with a drawn point within the match radius
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub coverage: f64,
    /// Mean nearest distance over covered reference points only
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub mean_matched_distance: f64,
    /// Combined score in [0, 1]
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub accuracy: f64,
    /// round((1 - accuracy) * 100)
    pub severity_score: u32,
    pub severity: Severity,
    /// Radius used for matching, in canvas pixels
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub match_radius: f64,
    /// Per reference point: whether it was covered
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub covered: Vec<bool>,
}

impl PathMatchScore {
    /// Accuracy as a rounded percentage
    pub fn accuracy_percent(&self) -> u32 {
        (self.accuracy * 100.0).round() as u32
    }

    pub fn severity_label(&self) -> &'static str {
        self.severity.label()
    }
}

/// Match radius for a canvas of the given size
pub fn match_radius(canvas_width: f64, canvas_height: f64) -> f64 {
    MIN_MATCH_RADIUS.max(canvas_width.min(canvas_height) * MATCH_RADIUS_FRACTION)
}

/// Score a drawn path against a reference path
///
/// Brute force over all reference/drawn pairs. Fails with
/// [`AnalysisError::NoDrawing`] if `drawn` is empty.
pub fn score_path_match(
    reference: &[Point],
    drawn: &[Point],
    canvas_width: f64,
    canvas_height: f64,
) -> Result<PathMatchScore> {
    if drawn.is_empty() {
        tracing::warn!("Path match requested with an empty drawing");
        return Err(AnalysisError::NoDrawing);
    }

    let radius = match_radius(canvas_width, canvas_height);
    let matched: Vec<f64> = reference
        .iter()
        .map(|p| nearest_distance(p, drawn))
        .collect();
    let covered: Vec<bool> = matched.iter().map(|&d| d <= radius).collect();

    let (covered_count, covered_dist_sum) = matched
        .iter()
        .filter(|&&d| d <= radius)
        .fold((0usize, 0.0), |(c, s), &d| (c + 1, s + d));

    let coverage = if reference.is_empty() {
        0.0
    } else {
        covered_count as f64 / reference.len() as f64
    };
    let mean_matched_distance = if covered_count > 0 {
        covered_dist_sum / covered_count as f64
    } else {
        radius * 2.0
    };
    let normalized_distance = (mean_matched_distance / radius).min(1.0);

    let mut raw_score = coverage * COVERAGE_WEIGHT + (1.0 - normalized_distance) * DISTANCE_WEIGHT;
    if drawn.len() < MIN_DRAWN_POINTS {
        let factor = (drawn.len() as f64 / MIN_DRAWN_POINTS as f64) * SPARSE_PENALTY_FACTOR;
        raw_score *= factor;
    }

    let accuracy = raw_score.clamp(0.0, 1.0);
    let severity_score = ((1.0 - accuracy) * 100.0).round() as u32;
    let severity = Severity::from_score(severity_score);

    tracing::debug!(
        reference = reference.len(),
        drawn = drawn.len(),
        coverage,
        accuracy,
        severity = severity.label(),
        "Scored path match"
    );

    Ok(PathMatchScore {
        coverage,
        mean_matched_distance,
        accuracy,
        severity_score,
        severity,
        match_radius: radius,
        covered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_line(n: usize, y: f64) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64 * 5.0, y)).collect()
    }

    #[test]
    fn test_match_radius() {
        assert_eq!(match_radius(100.0, 100.0), 12.0);
        assert!((match_radius(600.0, 400.0) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_identical_paths() {
        let path = horizontal_line(60, 50.0);
        let score = score_path_match(&path, &path, 400.0, 400.0).unwrap();
        assert_eq!(score.coverage, 1.0);
        assert_eq!(score.mean_matched_distance, 0.0);
        assert_eq!(score.accuracy, 1.0);
        assert_eq!(score.severity_score, 0);
        assert_eq!(score.severity, Severity::Low);
        assert!(score.covered.iter().all(|&c| c));
    }

    #[test]
    fn test_sparse_identical_path_is_penalized() {
        let path = horizontal_line(15, 50.0);
        let score = score_path_match(&path, &path, 400.0, 400.0).unwrap();
        assert_eq!(score.coverage, 1.0);
        // 1.0 * (15 / 30) * 0.5
        assert!((score.accuracy - 0.25).abs() < 1e-12);
        assert_eq!(score.severity_score, 75);
        assert_eq!(score.severity, Severity::High);
    }

    #[test]
    fn test_empty_drawing_is_an_error() {
        let path = horizontal_line(10, 0.0);
        let err = score_path_match(&path, &[], 400.0, 400.0).unwrap_err();
        assert!(matches!(err, AnalysisError::NoDrawing));
    }

    #[test]
    fn test_nothing_covered() {
        let reference = horizontal_line(40, 0.0);
        let drawn = horizontal_line(40, 500.0);
        let score = score_path_match(&reference, &drawn, 400.0, 400.0).unwrap();
        assert_eq!(score.coverage, 0.0);
        assert_eq!(score.mean_matched_distance, 2.0 * score.match_radius);
        assert_eq!(score.accuracy, 0.0);
        assert_eq!(score.severity_score, 100);
        assert_eq!(score.severity_label(), "High");
    }

    #[test]
    fn test_offset_drawing() {
        // Drawn 12px off a 24px radius: full coverage, normalized distance 0.5
        let reference = horizontal_line(40, 100.0);
        let drawn = horizontal_line(40, 112.0);
        let score = score_path_match(&reference, &drawn, 600.0, 400.0).unwrap();
        assert_eq!(score.coverage, 1.0);
        assert!((score.mean_matched_distance - 12.0).abs() < 1e-9);
        assert!((score.accuracy - 0.85).abs() < 1e-9);
        assert_eq!(score.severity_score, 15);
        assert_eq!(score.accuracy_percent(), 85);
    }

    #[test]
    fn test_severity_buckets() {
        assert_eq!(Severity::from_score(0), Severity::Low);
        assert_eq!(Severity::from_score(30), Severity::Low);
        assert_eq!(Severity::from_score(31), Severity::Medium);
        assert_eq!(Severity::from_score(60), Severity::Medium);
        assert_eq!(Severity::from_score(61), Severity::High);
        assert_eq!(
            Severity::Medium.tremor_likelihood(),
            TremorLikelihood::Possible
        );
        assert_eq!(TremorLikelihood::NotClear.to_string(), "Not Clear");
    }
}
