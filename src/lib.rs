//! # tremor-check: Motion and Drawing Self-Assessment Metrics
//!
//! Heuristic analyzers for a tremor self-assessment tool. A capture layer
//! (device motion sensor, pointer events on a canvas) records raw arrays;
//! this crate turns them into small result records the caller displays and
//! stores.
//!
//! ## Architecture
//!
//! - **Analysis**: pure functions, one per assessment, no shared state
//! - **Reference**: generated guides (spiral, sine line) used as ground truth
//! - **Session**: a result record the caller merges analyzer outputs into
//! - **Simulate**: seeded synthetic capture sources for demos and tests
//! - **Config**: capture thresholds and guide geometry, loaded from TOML
//!
//! ## Example
//!
//! ```ignore
//! use tremor_check::{
//!     analysis::{score_path_match, summarize_capture},
//!     reference::{archimedean_spiral, SpiralGuide},
//!     config::AnalysisConfig,
//!     SampleSeries, SessionResult,
//! };
//!
//! let config = AnalysisConfig::default();
//! let series = SampleSeries::new(magnitudes, timestamps_ms)?;
//! let spiral = archimedean_spiral(400.0, 400.0, &config.spiral);
//!
//! let session = SessionResult::new()
//!     .with_capture(summarize_capture(&series, &config.capture)?)
//!     .with_trace(score_path_match(&spiral, &drawn, 400.0, 400.0)?);
//! println!("{}", session.summary());
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod logging;
pub mod reference;
pub mod session;
pub mod simulate;
pub mod types;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use session::SessionResult;
pub use types::{Path, Point, SampleSeries, TargetCircle};
