//! Note Mapper
//!
//! Conversion of a frequency in Hz into the nearest equal-tempered note and
//! its signed deviation in cents.

use std::fmt::Display;

use serde::{Serialize, Serializer};

use crate::error::AnalysisError;

/// Standard concert pitch: the frequency of A4 in Hz.
pub const CONCERT_A4_HZ: f32 = 440.0;

/// Semitones per octave in the equal-tempered scale.
const SEMITONES: i32 = 12;

/// Index of A within the C-rooted chromatic scale.
const A_PITCH_CLASS: i32 = 9;

/// Octave number of the reference A.
const REFERENCE_OCTAVE: i32 = 4;

/// Chromatic scale starting at C, in pitch-class order.
const CHROMATIC_SCALE: [NoteName; 12] = [
    NoteName::C,
    NoteName::Cs,
    NoteName::D,
    NoteName::Ds,
    NoteName::E,
    NoteName::F,
    NoteName::Fs,
    NoteName::G,
    NoteName::Gs,
    NoteName::A,
    NoteName::As,
    NoteName::B,
];

/// Twelve chromatic pitch classes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NoteName {
    /// C
    C,
    /// C sharp / D flat
    Cs,
    /// D
    D,
    /// D sharp / E flat
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    Fs,
    /// G
    G,
    /// G sharp / A flat
    Gs,
    /// A
    A,
    /// A sharp / B flat
    As,
    /// B
    B,
}

impl NoteName {
    /// Pitch-class index in `[0, 11]`, with C at 0.
    pub const fn pitch_class(self) -> u8 {
        self as u8
    }

    /// Conventional sharp-based label, e.g. `"C#"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::B => "B",
        }
    }
}

impl Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NoteName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The nearest equal-tempered note to a frequency.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct NoteResult {
    /// Pitch class of the nearest note.
    pub note: NoteName,
    /// Scientific octave number of the nearest note (A4 = 440 Hz).
    pub octave: i32,
    /// Signed deviation from the nearest note in cents, in `(-50, 50]`.
    pub cents: f32,
}

impl Display for NoteResult {
    /// Combined label, e.g. `"A4"` or `"F#2"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}

/// Builder for a [`NoteMapper`] with a custom reference pitch.
#[derive(Debug)]
pub struct NoteMapperBuilder {
    reference_a4: f32,
}

impl NoteMapperBuilder {
    /// Start with the standard [`CONCERT_A4_HZ`] reference.
    pub fn new() -> Self {
        NoteMapperBuilder {
            reference_a4: CONCERT_A4_HZ,
        }
    }

    /// Set the reference frequency of A4 in Hz (e.g. 432.0).
    pub fn reference_a4(mut self, hz: f32) -> Self {
        self.reference_a4 = hz;
        self
    }

    /// Finalize and create the [`NoteMapper`].
    pub fn build(self) -> Result<NoteMapper, AnalysisError> {
        if !self.reference_a4.is_finite() || self.reference_a4 <= 0.0 {
            return Err(AnalysisError::Configuration(
                "reference_a4 must be positive and finite".into(),
            ));
        }
        Ok(NoteMapper {
            reference_a4: self.reference_a4,
        })
    }
}

impl Default for NoteMapperBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps frequencies onto the 12-tone equal-tempered scale.
#[derive(Debug)]
pub struct NoteMapper {
    reference_a4: f32,
}

impl NoteMapper {
    /// Start customizing with a builder.
    pub fn builder() -> NoteMapperBuilder {
        NoteMapperBuilder::new()
    }

    /// Create a mapper referenced to [`CONCERT_A4_HZ`].
    pub fn new() -> Self {
        NoteMapper {
            reference_a4: CONCERT_A4_HZ,
        }
    }

    /// The configured reference frequency of A4 in Hz.
    pub fn reference_a4(&self) -> f32 {
        self.reference_a4
    }

    /// Map `frequency` to the nearest note and its cents deviation.
    ///
    /// Fails with [`AnalysisError::InvalidFrequency`] unless `frequency` is
    /// positive and finite.
    pub fn map_to_note(&self, frequency: f32) -> Result<NoteResult, AnalysisError> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(AnalysisError::InvalidFrequency { got: frequency });
        }

        let semitones = SEMITONES as f32 * (frequency / self.reference_a4).log2();
        // f32::round ties away from zero, which the contract requires.
        let nearest = semitones.round();
        let cents = 100.0 * (semitones - nearest);

        // Shift so C sits at pitch class 0; rem_euclid/div_euclid keep the
        // class non-negative and the octave consistent below A4.
        let from_c = nearest as i32 + A_PITCH_CLASS;
        let pitch_class = from_c.rem_euclid(SEMITONES) as usize;
        let octave = from_c.div_euclid(SEMITONES) + REFERENCE_OCTAVE;

        Ok(NoteResult {
            note: CHROMATIC_SCALE[pitch_class],
            octave,
            cents,
        })
    }
}

impl Default for NoteMapper {
    fn default() -> Self {
        NoteMapper::new()
    }
}
