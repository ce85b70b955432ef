//! Tuning Feedback
//!
//! Classification of a cents deviation into a human-readable tuning
//! instruction.

use std::fmt::Display;

use serde::{Serialize, Serializer};

/// Deviations under this many cents count as in tune.
pub const IN_TUNE_CENTS: f32 = 5.0;

/// Deviations under this many cents count as close; at or beyond it the
/// sign decides between flat and sharp.
pub const CLOSE_CENTS: f32 = 20.0;

/// Tuning instruction derived from a cents deviation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TuningFeedback {
    /// Within [`IN_TUNE_CENTS`] of the target.
    InTune,
    /// Between [`IN_TUNE_CENTS`] and [`CLOSE_CENTS`] off, either direction.
    Close,
    /// At least [`CLOSE_CENTS`] below the target.
    Flat,
    /// At least [`CLOSE_CENTS`] above the target.
    Sharp,
}

impl TuningFeedback {
    /// Classify a signed cents deviation. Total over all floats.
    pub fn for_cents(cents: f32) -> Self {
        let magnitude = cents.abs();
        if magnitude < IN_TUNE_CENTS {
            TuningFeedback::InTune
        } else if magnitude < CLOSE_CENTS {
            TuningFeedback::Close
        } else if cents < 0.0 {
            TuningFeedback::Flat
        } else {
            TuningFeedback::Sharp
        }
    }

    /// The user-facing instruction for this classification.
    pub const fn message(self) -> &'static str {
        match self {
            TuningFeedback::InTune => "Perfectly in tune!",
            TuningFeedback::Close => "Close, but could be more precise.",
            TuningFeedback::Flat => "Flat - tighten the string to raise the pitch.",
            TuningFeedback::Sharp => "Sharp - loosen the string to lower the pitch.",
        }
    }
}

impl Display for TuningFeedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for TuningFeedback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}
