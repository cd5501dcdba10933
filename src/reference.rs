//! Reference guide generation
//!
//! Guides are drawn faintly on the canvas for the user to trace and then
//! serve as ground truth for scoring:
//! - [`archimedean_spiral`] for the spiral trace ([`crate::analysis::path_match`])
//! - [`sine_guide`] for the line trace ([`crate::analysis::line`])

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::types::{Path, Point};

/// Spiral guide geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiralGuide {
    /// Number of full turns
    #[serde(default = "default_turns")]
    pub turns: f64,
    /// Number of generated points
    #[serde(default = "default_spiral_points")]
    pub points: usize,
    /// Gap between the outer turn and the canvas edge (px)
    #[serde(default = "default_margin")]
    pub margin: f64,
}

fn default_turns() -> f64 {
    3.5
}

fn default_spiral_points() -> usize {
    520
}

fn default_margin() -> f64 {
    20.0
}

impl Default for SpiralGuide {
    fn default() -> Self {
        Self {
            turns: default_turns(),
            points: default_spiral_points(),
            margin: default_margin(),
        }
    }
}

/// Line guide geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGuide {
    /// Horizontal distance between guide points (px)
    #[serde(default = "default_step")]
    pub step: f64,
    /// Wave amplitude as a fraction of canvas height
    #[serde(default = "default_amplitude")]
    pub amplitude_fraction: f64,
}

fn default_step() -> f64 {
    4.0
}

fn default_amplitude() -> f64 {
    0.12
}

impl Default for LineGuide {
    fn default() -> Self {
        Self {
            step: default_step(),
            amplitude_fraction: default_amplitude(),
        }
    }
}

/// Archimedean spiral centered on the canvas, growing outward from the center
pub fn archimedean_spiral(width: f64, height: f64, guide: &SpiralGuide) -> Path {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let max_r = cx.min(cy) - guide.margin;
    let last = guide.points.saturating_sub(1).max(1) as f64;

    (0..guide.points)
        .map(|i| {
            let t = i as f64 / last;
            let theta = t * PI * 2.0 * guide.turns;
            let r = t * max_r;
            Point::new(cx + r * theta.cos(), cy + r * theta.sin())
        })
        .collect()
}

/// One full sine period across the canvas, centered vertically
pub fn sine_guide(width: f64, height: f64, guide: &LineGuide) -> Path {
    if guide.step <= 0.0 {
        return Vec::new();
    }
    let amplitude = height * guide.amplitude_fraction;

    std::iter::successors(Some(0.0), |x| Some(x + guide.step))
        .take_while(|&x| x < width)
        .map(|x| {
            let t = x / width;
            Point::new(x, height / 2.0 + (t * PI * 2.0).sin() * amplitude)
        })
        .collect()
}
