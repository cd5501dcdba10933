//! Test data builders for capture series and drawn paths

use std::f64::consts::PI;
use tremor_check::{Point, SampleSeries};

/// Builder for synthetic motion captures
pub struct SeriesBuilder {
    sample_rate: f64,
    duration: f64,
    frequency: f64,
    amplitude: f64,
    offset: f64,
    rectify: bool,
}

impl SeriesBuilder {
    pub fn new() -> Self {
        Self {
            sample_rate: 60.0,
            duration: 8.0,
            frequency: 5.0,
            amplitude: 1.0,
            offset: 0.0,
            rectify: false,
        }
    }

    pub fn sample_rate(mut self, hz: f64) -> Self {
        self.sample_rate = hz;
        self
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    pub fn frequency(mut self, hz: f64) -> Self {
        self.frequency = hz;
        self
    }

    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn rectified(mut self) -> Self {
        self.rectify = true;
        self
    }

    pub fn build(self) -> SampleSeries {
        let n = (self.sample_rate * self.duration) as usize;
        let samples = (0..n)
            .map(|i| {
                let wave = (2.0 * PI * self.frequency * i as f64 / self.sample_rate).sin();
                let wave = if self.rectify { wave.abs() } else { wave };
                self.offset + self.amplitude * wave
            })
            .collect();
        let timestamps = (0..n)
            .map(|i| 1_700_000_000_000.0 + i as f64 * 1000.0 / self.sample_rate)
            .collect();
        SampleSeries::new(samples, timestamps).expect("builder produces a valid series")
    }
}

/// Points evenly spaced on a circle
pub fn circle(cx: f64, cy: f64, r: f64, n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = 2.0 * PI * i as f64 / n as f64;
            Point::new(cx + r * a.cos(), cy + r * a.sin())
        })
        .collect()
}

/// Translate every point of a path
pub fn shifted(path: &[Point], dx: f64, dy: f64) -> Vec<Point> {
    path.iter().map(|p| Point::new(p.x + dx, p.y + dy)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_builder() {
        let series = SeriesBuilder::new().sample_rate(50.0).duration(2.0).build();
        assert_eq!(series.len(), 100);
    }
}
