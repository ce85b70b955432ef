//! Error type shared by the analysis pipeline.

use thiserror::Error;

/// Errors returned by the pitch-analysis pipeline.
///
/// Every variant is deterministic for a given input and non-retryable.
/// [`NoPitchDetected`](AnalysisError::NoPitchDetected) is a legitimate
/// negative outcome rather than a caller mistake; embedding layers can use
/// [`is_invalid_input`](AnalysisError::is_invalid_input) to tell the two
/// classes apart when mapping to transport status codes.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The audio buffer was empty or too short for a meaningful transform.
    #[error("audio buffer must contain at least 2 samples, got {got}")]
    BufferTooShort {
        /// The actual number of samples received.
        got: usize,
    },

    /// The sample rate was zero.
    #[error("sample rate must be positive")]
    InvalidSampleRate,

    /// The buffer contained a NaN or infinite sample.
    #[error("sample at index {index} is not a finite number")]
    NonFiniteSample {
        /// Index of the first offending sample.
        index: usize,
    },

    /// A zero, negative, or non-finite frequency was passed to note mapping.
    #[error("frequency must be positive and finite, got {got}")]
    InvalidFrequency {
        /// The frequency value received.
        got: f32,
    },

    /// No spectral peak cleared the detection threshold.
    #[error("Could not detect a clear pitch. Please play a single note.")]
    NoPitchDetected,

    /// An error occurred during the configuration of a pipeline component.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl AnalysisError {
    /// `true` when the error is a caller mistake (malformed input or
    /// configuration), `false` for the no-pitch outcome.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, AnalysisError::NoPitchDetected)
    }
}
