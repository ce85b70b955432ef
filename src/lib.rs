//! # pitch_tuner
//!
//! Monophonic pitch estimation for instrument tuning: transform a short
//! audio buffer into a magnitude spectrum, pick the dominant spectral peak,
//! map its frequency onto the 12-tone equal-tempered scale, and classify the
//! deviation in cents into a tuning instruction. Static reference tunings
//! for common stringed instruments ride along under the same contract.
//!
//! Every operation is a pure, synchronous computation over caller-owned
//! data; the crate holds no shared mutable state and is safe to invoke from
//! any number of threads. Transport concerns (routing, JSON framing) belong
//! to the embedding service layer.
//!
//! ## Example
//! ```rust
//! use pitch_tuner::{analyze_pitch, get_tuning};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) A buffer from your decoder: one second of A4 at 4096 Hz
//!     let sample_rate = 4096;
//!     let samples: Vec<f32> = (0..4096)
//!         .map(|i| {
//!             (2.0 * std::f32::consts::PI * 440.0 * i as f32 / sample_rate as f32).sin()
//!         })
//!         .collect();
//!
//!     // 2) Full pipeline: spectrum -> peak -> note -> feedback
//!     let analysis = analyze_pitch(&samples, sample_rate)?;
//!     println!(
//!         "{:.1} Hz ~ {}{} ({:+.1} cents): {}",
//!         analysis.frequency, analysis.note, analysis.octave, analysis.cents,
//!         analysis.feedback,
//!     );
//!
//!     // 3) Reference tunings
//!     let tuning = get_tuning("guitar")?;
//!     println!("{tuning}");
//!
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Instrument tuning lookup API.
pub use catalog::{CatalogError, InstrumentTuning};

/// Analysis pipeline error type.
pub use error::AnalysisError;

/// Tuning feedback classification API.
pub use feedback::{TuningFeedback, CLOSE_CENTS, IN_TUNE_CENTS};

/// Note mapping API.
pub use note::{NoteMapper, NoteMapperBuilder, NoteName, NoteResult, CONCERT_A4_HZ};

/// Spectral analysis API.
pub use spectral::{
    PitchEstimate, SpectralAnalyzer, SpectralAnalyzerBuilder, Spectrum, DEFAULT_PEAK_THRESHOLD,
};

use serde::Serialize;

/// Instrument tuning catalog module.
pub mod catalog;

/// Analysis error module.
pub mod error;

/// Tuning feedback classification module.
pub mod feedback;

/// Frequency-to-note mapping module.
pub mod note;

/// Spectral transform and peak selection module.
pub mod spectral;

/// Composite result of a full pitch analysis.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    /// Dominant frequency in Hz.
    pub frequency: f32,
    /// Pitch class of the nearest equal-tempered note.
    pub note: NoteName,
    /// Scientific octave number of the nearest note.
    pub octave: i32,
    /// Signed deviation from the nearest note in cents.
    pub cents: f32,
    /// Tuning instruction derived from the cents deviation.
    #[serde(rename = "message")]
    pub feedback: TuningFeedback,
}

/// Run the full analysis pipeline over one audio buffer with default
/// configuration (peak threshold [`DEFAULT_PEAK_THRESHOLD`], reference
/// [`CONCERT_A4_HZ`]).
///
/// Fails with an invalid-input variant of [`AnalysisError`] on malformed
/// buffers, or with [`AnalysisError::NoPitchDetected`] when no spectral peak
/// clears the threshold; the latter is a normal negative outcome the
/// embedding layer should surface with its explanatory message rather than
/// as a hard failure.
pub fn analyze_pitch(samples: &[f32], sample_rate: u32) -> Result<AnalysisResponse, AnalysisError> {
    let estimate = SpectralAnalyzer::new()
        .analyze(samples, sample_rate)?
        .ok_or(AnalysisError::NoPitchDetected)?;

    let note = NoteMapper::new().map_to_note(estimate.frequency)?;
    let feedback = TuningFeedback::for_cents(note.cents);

    Ok(AnalysisResponse {
        frequency: estimate.frequency,
        note: note.note,
        octave: note.octave,
        cents: note.cents,
        feedback,
    })
}

/// Look up the standard tuning for an instrument by exact name.
pub fn get_tuning(instrument: &str) -> Result<&'static InstrumentTuning, CatalogError> {
    catalog::lookup(instrument)
}
