//! Core data types for tremor-check
//!
//! This module contains the fundamental data structures consumed by the
//! analyzers: captured sample series, 2D points and paths, and circular
//! targets for the repetition test.
//!
//! # Main Types
//!
//! - [`SampleSeries`] - Motion magnitudes paired with millisecond timestamps
//! - [`Point`] - A 2D coordinate with an optional capture timestamp
//! - [`Path`] - An ordered sequence of points (reference guide or drawn stroke)
//! - [`TargetCircle`] - A circle the user is asked to trace repeatedly
//!
//! All types are ephemeral: callers build them from raw capture arrays,
//! pass them to an analyzer, and discard them once the result is returned.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// A 2D point on a drawing surface, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Capture time in milliseconds, if the point came from pointer input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,
}

impl Point {
    /// Create a point without a timestamp
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, t: None }
    }

    /// Create a point captured at `t` milliseconds
    pub const fn timed(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t: Some(t) }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Heading of the segment from `self` to `other`, in radians
    pub fn heading_to(&self, other: &Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// An ordered sequence of points
pub type Path = Vec<Point>;

/// Minimum distance from `point` to any point of `path`
///
/// Brute force over every point of `path`. Returns `f64::INFINITY` for an
/// empty path.
pub fn nearest_distance(point: &Point, path: &[Point]) -> f64 {
    path.iter()
        .map(|q| point.distance(q))
        .fold(f64::INFINITY, f64::min)
}

/// Arithmetic mean position of a set of points
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// A circular target for the repetition test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetCircle {
    pub center: Point,
    pub radius: f64,
}

impl TargetCircle {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Captured motion magnitudes with their capture times
///
/// Invariant: `samples.len() == timestamps.len()` and timestamps never
/// decrease. Use [`SampleSeries::new`] to enforce it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSeries {
    samples: Vec<f64>,
    timestamps: Vec<f64>,
}

impl SampleSeries {
    /// Build a series, validating length and timestamp ordering
    pub fn new(samples: Vec<f64>, timestamps: Vec<f64>) -> Result<Self> {
        if samples.len() != timestamps.len() {
            return Err(AnalysisError::LengthMismatch {
                samples: samples.len(),
                timestamps: timestamps.len(),
            });
        }
        if samples.is_empty() {
            return Err(AnalysisError::insufficient("sample series", 1, 0));
        }
        if let Some(index) = timestamps
            .windows(2)
            .position(|w| w[1] < w[0])
            .map(|i| i + 1)
        {
            return Err(AnalysisError::UnorderedTimestamps { index });
        }
        Ok(Self {
            samples,
            timestamps,
        })
    }

    /// Build a series from `(timestamp_ms, magnitude)` pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        let (timestamps, samples): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        Self::new(samples, timestamps)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time between the first and last sample, in seconds
    pub fn duration_secs(&self) -> f64 {
        match (self.timestamps.first(), self.timestamps.last()) {
            (Some(first), Some(last)) => (last - first) / 1000.0,
            _ => 0.0,
        }
    }

    /// Split back into the raw sample and timestamp vectors
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.samples, self.timestamps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn test_nearest_distance() {
        let path = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        assert_eq!(nearest_distance(&Point::new(9.0, 0.0), &path), 1.0);
        assert!(nearest_distance(&Point::new(9.0, 0.0), &[]).is_infinite());
    }

    #[test]
    fn test_centroid() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert_eq!(centroid(&square), Some(Point::new(1.0, 1.0)));
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn test_sample_series_validation() {
        assert!(SampleSeries::new(vec![1.0, 2.0], vec![0.0, 10.0]).is_ok());

        let err = SampleSeries::new(vec![1.0, 2.0], vec![0.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::LengthMismatch { .. }));

        let err = SampleSeries::new(vec![1.0, 2.0, 3.0], vec![0.0, 20.0, 10.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::UnorderedTimestamps { index: 2 }));

        let err = SampleSeries::new(vec![], vec![]).unwrap_err();
        assert!(err.is_retryable());
    }

    #[test]
    fn test_sample_series_duration() {
        let series =
            SampleSeries::from_pairs([(1000.0, 0.1), (1500.0, 0.2), (3000.0, 0.3)]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.duration_secs(), 2.0);
        assert_eq!(series.samples(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_timed_point_serialization() {
        let p = Point::timed(1.0, 2.0, 33.0);
        let json = serde_json::to_string(&p).unwrap();
        let parsed: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);

        let untimed = serde_json::to_string(&Point::new(1.0, 2.0)).unwrap();
        assert!(!untimed.contains("\"t\""));
    }
}
