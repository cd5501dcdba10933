//! Error handling for tremor-check
//!
//! This module defines the error type shared by every analyzer and a Result
//! alias for use throughout the crate.

use thiserror::Error;

/// Main error type for tremor-check operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Fewer points or samples than an analyzer needs to produce a result
    #[error("Insufficient input for {what}: need at least {required}, got {actual}")]
    InsufficientInput {
        what: &'static str,
        required: usize,
        actual: usize,
    },

    /// A path comparison was requested without any drawn points
    #[error("No drawing found")]
    NoDrawing,

    /// Sample and timestamp sequences differ in length
    #[error("Sample series length mismatch: {samples} samples, {timestamps} timestamps")]
    LengthMismatch { samples: usize, timestamps: usize },

    /// Timestamps go backwards at the given index
    #[error("Timestamps decrease at index {index}")]
    UnorderedTimestamps { index: usize },

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AnalysisError>,
    },
}

impl AnalysisError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AnalysisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Shorthand for an [`AnalysisError::InsufficientInput`]
    pub fn insufficient(what: &'static str, required: usize, actual: usize) -> Self {
        AnalysisError::InsufficientInput {
            what,
            required,
            actual,
        }
    }

    /// Whether the caller should prompt the user to retry the capture
    pub fn is_retryable(&self) -> bool {
        match self {
            AnalysisError::InsufficientInput { .. } | AnalysisError::NoDrawing => true,
            AnalysisError::WithContext { source, .. } => source.is_retryable(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Serialization(err.to_string())
    }
}

/// Result type alias for tremor-check operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::insufficient("line smoothness", 5, 3);
        assert_eq!(
            err.to_string(),
            "Insufficient input for line smoothness: need at least 5, got 3"
        );
        assert_eq!(AnalysisError::NoDrawing.to_string(), "No drawing found");
    }

    #[test]
    fn test_error_with_context() {
        let err = AnalysisError::NoDrawing;
        let with_ctx = err.with_context("Spiral trace");
        assert!(with_ctx.to_string().contains("Spiral trace"));
        assert!(with_ctx.is_retryable());
    }

    #[test]
    fn test_length_mismatch_error() {
        let err = AnalysisError::LengthMismatch {
            samples: 10,
            timestamps: 9,
        };
        assert!(err.to_string().contains("10 samples"));
        assert!(err.to_string().contains("9 timestamps"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_result_ext_context() {
        let res: Result<()> = Err(AnalysisError::Config("bad value".to_string()));
        let err = res.context("Loading analysis config").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Loading analysis config: Configuration error: bad value"
        );
    }
}
