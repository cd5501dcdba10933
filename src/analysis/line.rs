//! Line trace deviation and smoothness
//!
//! The user follows a fixed guide (a gentle sinusoid across the canvas).
//! Deviation is measured against the guide; smoothness and overcorrections
//! are measured on the drawn path alone from its turning angles.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::stats::standard_deviation;
use crate::error::{AnalysisError, Result};
use crate::types::{nearest_distance, Point};

/// Minimum drawn points for a line trace
pub const MIN_LINE_POINTS: usize = 5;

/// Deviation and steadiness of a traced line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineMetrics {
    /// Mean distance from each drawn point to the nearest guide point (px)
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub mean_deviation: f64,
    /// Standard deviation of the turning angles (radians)
    #[serde(deserialize_with = "crate::analysis::nan_serde::f64_or_nan")]
    pub smoothness: f64,
    /// Sign reversals in the change of turning angle
    pub overcorrection_count: usize,
}

/// Absolute turning angle at each interior point of a path, in [0, π]
pub fn turning_angles(points: &[Point]) -> Vec<f64> {
    points
        .windows(3)
        .map(|w| {
            let a1 = w[0].heading_to(&w[1]);
            let a2 = w[1].heading_to(&w[2]);
            let da = (a2 - a1).abs();
            if da > PI {
                (2.0 * PI - da).abs()
            } else {
                da
            }
        })
        .collect()
}

/// Number of sign reversals in the first difference of `angles`
pub fn count_sign_reversals(angles: &[f64]) -> usize {
    let diffs: Vec<f64> = angles.windows(2).map(|w| w[1] - w[0]).collect();
    diffs.windows(2).filter(|d| d[0] * d[1] < 0.0).count()
}

/// Compare a drawn line against its guide
///
/// Fails with [`AnalysisError::InsufficientInput`] for fewer than
/// [`MIN_LINE_POINTS`] drawn points or an empty guide.
pub fn line_smoothness_metrics(drawn: &[Point], reference: &[Point]) -> Result<LineMetrics> {
    if drawn.len() < MIN_LINE_POINTS {
        tracing::warn!(points = drawn.len(), "Line trace too short");
        return Err(AnalysisError::insufficient(
            "line trace",
            MIN_LINE_POINTS,
            drawn.len(),
        ));
    }
    if reference.is_empty() {
        tracing::warn!("Line trace scored against an empty guide");
        return Err(AnalysisError::insufficient("line guide", 1, 0));
    }

    let mean_deviation =
        drawn.iter().map(|q| nearest_distance(q, reference)).sum::<f64>() / drawn.len() as f64;

    let angles = turning_angles(drawn);
    let metrics = LineMetrics {
        mean_deviation,
        smoothness: standard_deviation(&angles),
        overcorrection_count: count_sign_reversals(&angles),
    };

    tracing::debug!(?metrics, "Scored line trace");
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight(n: usize, y: f64) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64 * 4.0, y)).collect()
    }

    #[test]
    fn test_straight_line_on_guide() {
        let guide = straight(50, 100.0);
        let drawn = straight(20, 100.0);
        let metrics = line_smoothness_metrics(&drawn, &guide).unwrap();
        assert_eq!(metrics.mean_deviation, 0.0);
        assert_eq!(metrics.smoothness, 0.0);
        assert_eq!(metrics.overcorrection_count, 0);
    }

    #[test]
    fn test_offset_deviation() {
        let guide = straight(50, 100.0);
        let drawn = straight(10, 106.0);
        let metrics = line_smoothness_metrics(&drawn, &guide).unwrap();
        assert!((metrics.mean_deviation - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_too_few_points() {
        let guide = straight(50, 100.0);
        let err = line_smoothness_metrics(&straight(4, 100.0), &guide).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InsufficientInput {
                required: 5,
                actual: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_guide() {
        let err = line_smoothness_metrics(&straight(10, 100.0), &[]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InsufficientInput {
                what: "line guide",
                ..
            }
        ));
    }

    #[test]
    fn test_nan_metrics_survive_json() {
        let metrics = LineMetrics {
            mean_deviation: f64::INFINITY,
            smoothness: f64::NAN,
            overcorrection_count: 2,
        };
        let json = serde_json::to_string(&metrics).unwrap();
        let parsed: LineMetrics = serde_json::from_str(&json).unwrap();
        assert!(parsed.mean_deviation.is_nan());
        assert!(parsed.smoothness.is_nan());
        assert_eq!(parsed.overcorrection_count, 2);
    }

    #[test]
    fn test_turning_angle_wraps() {
        // Heading goes from just below +π to just above -π: a small turn
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(-10.0, 0.1),
            Point::new(-20.0, -0.1),
        ];
        let angles = turning_angles(&points);
        assert_eq!(angles.len(), 1);
        assert!(angles[0] < 0.1, "angle {} should be small", angles[0]);
    }

    #[test]
    fn test_zigzag_overcorrections() {
        // Turning angles alternate large/small, so every difference flips sign
        let angles = [0.1, 0.9, 0.1, 0.9, 0.1, 0.9];
        assert_eq!(count_sign_reversals(&angles), 4);
        assert_eq!(count_sign_reversals(&[0.1, 0.2, 0.3, 0.4]), 0);
        assert_eq!(count_sign_reversals(&[0.5]), 0);
    }

    #[test]
    fn test_shaky_line_is_less_smooth() {
        let guide = straight(100, 100.0);
        let steady = straight(30, 100.0);
        let shaky: Vec<Point> = (0..30)
            .map(|i| {
                let jitter = match i % 3 {
                    0 => 0.0,
                    1 => 3.0,
                    _ => -2.0,
                };
                Point::new(i as f64 * 4.0, 100.0 + jitter)
            })
            .collect();

        let steady = line_smoothness_metrics(&steady, &guide).unwrap();
        let shaky = line_smoothness_metrics(&shaky, &guide).unwrap();
        assert!(shaky.smoothness > steady.smoothness);
        assert!(shaky.mean_deviation > steady.mean_deviation);
    }
}
