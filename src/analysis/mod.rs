//! Analysis module for motion and drawing assessments
//!
//! Every analyzer is a pure function over caller-supplied arrays and returns
//! an immutable result record. Nothing here keeps state between calls.
//!
//! - [`stats`] - mean and population standard deviation
//! - [`frequency`] - dominant frequency via a DFT magnitude scan
//! - [`path_match`] - spiral trace coverage and severity
//! - [`shape`] - circularity and repetition scoring
//! - [`line`] - line trace deviation and smoothness
//! - [`capture`], [`hold`], [`tapping`], [`reaction`] - per-test summaries

pub mod capture;
pub mod frequency;
pub mod hold;
pub mod line;
pub(crate) mod nan_serde;
pub mod path_match;
pub mod reaction;
pub mod shape;
pub mod stats;
pub mod tapping;

pub use capture::{summarize_capture, CaptureSummary};
pub use frequency::{
    estimate_dominant_frequency, FrequencyEstimate, FrequencyEstimator, FrequencyMethod, Spectrum,
};
pub use hold::{analyze_hold, HoldMetrics, HoldSample};
pub use line::{line_smoothness_metrics, LineMetrics};
pub use path_match::{score_path_match, PathMatchScore, Severity, TremorLikelihood};
pub use reaction::{summarize_reactions, ReactionMetrics};
pub use shape::{
    circularity, repetition_quality, score_repetition_against_targets, RepetitionQuality,
    RepetitionScore,
};
pub use stats::{mean, standard_deviation};
pub use tapping::{tapping_metrics, Tap, TapSequence, TapSide, TappingMetrics};
