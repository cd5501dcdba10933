//! Session result records
//!
//! A session collects the outcome of each assessment the user completes.
//! Analyzers never touch the session; the caller merges each returned
//! result into its own [`SessionResult`] with the `with_*` builders.
//!
//! # Features
//!
//! - One optional section per assessment
//! - Overall tremor verdict derived from the capture or the spiral trace
//! - One-line human summary for display
//! - JSON serialization for whatever store the caller uses

pub mod record;

pub use record::SessionResult;
