//! Tuning Catalog
//!
//! Static reference tunings for common stringed instruments.

use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;

/// Standard open-string tunings, lowest string first.
const CATALOG: &[InstrumentTuning] = &[
    InstrumentTuning {
        instrument: "guitar",
        strings: &["E2", "A2", "D3", "G3", "B3", "E4"],
    },
    InstrumentTuning {
        instrument: "bass",
        strings: &["E1", "A1", "D2", "G2"],
    },
    InstrumentTuning {
        instrument: "violin",
        strings: &["G3", "D4", "A4", "E5"],
    },
    InstrumentTuning {
        instrument: "cello",
        strings: &["C2", "G2", "D3", "A3"],
    },
    InstrumentTuning {
        instrument: "ukulele",
        strings: &["G4", "C4", "E4", "A4"],
    },
];

/// Errors when looking up an instrument tuning.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested instrument is not in the catalog.
    #[error("unknown instrument `{0}`")]
    UnknownInstrument(String),
}

/// Standard tuning of one instrument: ordered open-string note labels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct InstrumentTuning {
    /// Instrument name, e.g. `"guitar"`.
    pub instrument: &'static str,
    /// Open-string note labels, lowest string first.
    pub strings: &'static [&'static str],
}

impl Display for InstrumentTuning {
    /// Summary sentence, e.g.
    /// `"Standard tuning for guitar is E2, A2, D3, G3, B3, E4"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Standard tuning for {} is {}",
            self.instrument,
            self.strings.join(", ")
        )
    }
}

/// Look up the standard tuning for `instrument` (exact, case-sensitive name).
///
/// Unknown instruments fail with [`CatalogError::UnknownInstrument`]; there
/// is no default.
pub fn lookup(instrument: &str) -> Result<&'static InstrumentTuning, CatalogError> {
    CATALOG
        .iter()
        .find(|t| t.instrument == instrument)
        .ok_or_else(|| CatalogError::UnknownInstrument(instrument.to_string()))
}

/// Names of every instrument in the catalog, in table order.
pub fn instruments() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|t| t.instrument)
}
