//! Spectral Analyzer
//!
//! Magnitude-spectrum computation and dominant-peak selection for short
//! monophonic audio buffers.

use rustfft::{num_complex::Complex, FftPlanner};
use serde::Serialize;

use crate::error::AnalysisError;

/// Absolute magnitude a spectral bin must reach to qualify as a peak.
pub const DEFAULT_PEAK_THRESHOLD: f32 = 0.1;

/// Minimum buffer length for a meaningful transform.
const MIN_BUFFER_LEN: usize = 2;

/// A single detected fundamental frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PitchEstimate {
    /// Estimated fundamental frequency in Hz.
    pub frequency: f32,
}

/// Magnitude spectrum over the non-redundant half of a real input buffer.
///
/// Holds `⌊N/2⌋` bins for an `N`-sample buffer; bin frequencies are linearly
/// spaced over `[0, sample_rate / 2]`.
#[derive(Debug, Clone)]
pub struct Spectrum {
    frequencies: Vec<f32>,
    magnitudes: Vec<f32>,
}

impl Spectrum {
    /// Number of bins.
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// `true` if the spectrum holds no bins.
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// `(frequency, magnitude)` of bin `i`, or `None` out of range.
    pub fn bin(&self, i: usize) -> Option<(f32, f32)> {
        Some((*self.frequencies.get(i)?, *self.magnitudes.get(i)?))
    }

    /// Bin center frequencies in Hz.
    pub fn frequencies(&self) -> &[f32] {
        &self.frequencies
    }

    /// Bin magnitudes (moduli of the unnormalized forward DFT).
    pub fn magnitudes(&self) -> &[f32] {
        &self.magnitudes
    }
}

/// Builder for a [`SpectralAnalyzer`].
#[derive(Debug)]
pub struct SpectralAnalyzerBuilder {
    peak_threshold: f32,
}

impl SpectralAnalyzerBuilder {
    /// Start with the default peak threshold of [`DEFAULT_PEAK_THRESHOLD`].
    pub fn new() -> Self {
        SpectralAnalyzerBuilder {
            peak_threshold: DEFAULT_PEAK_THRESHOLD,
        }
    }

    /// Set the absolute magnitude threshold for peak detection.
    pub fn peak_threshold(mut self, threshold: f32) -> Self {
        self.peak_threshold = threshold;
        self
    }

    /// Finalize and create the [`SpectralAnalyzer`].
    pub fn build(self) -> Result<SpectralAnalyzer, AnalysisError> {
        if !self.peak_threshold.is_finite() || self.peak_threshold < 0.0 {
            return Err(AnalysisError::Configuration(
                "peak_threshold must be finite and non-negative".into(),
            ));
        }
        Ok(SpectralAnalyzer {
            peak_threshold: self.peak_threshold,
        })
    }
}

impl Default for SpectralAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateless spectral pitch estimator.
///
/// Holds configuration only; every call owns its input and output, so a
/// single analyzer may be shared freely across threads.
#[derive(Debug)]
pub struct SpectralAnalyzer {
    peak_threshold: f32,
}

impl SpectralAnalyzer {
    /// Start customizing with a builder.
    pub fn builder() -> SpectralAnalyzerBuilder {
        SpectralAnalyzerBuilder::new()
    }

    /// Create an analyzer with the default peak threshold.
    pub fn new() -> Self {
        SpectralAnalyzer {
            peak_threshold: DEFAULT_PEAK_THRESHOLD,
        }
    }

    /// Estimate the dominant pitch of `samples`.
    ///
    /// Returns `Ok(None)` when no spectral peak clears the threshold, which
    /// is a valid negative outcome rather than an error. Fails with
    /// [`AnalysisError::BufferTooShort`], [`AnalysisError::InvalidSampleRate`],
    /// or [`AnalysisError::NonFiniteSample`] on malformed input.
    pub fn analyze(
        &self,
        samples: &[f32],
        sample_rate: u32,
    ) -> Result<Option<PitchEstimate>, AnalysisError> {
        let spectrum = self.magnitude_spectrum(samples, sample_rate)?;
        Ok(self.strongest_peak(&spectrum))
    }

    /// Compute the magnitude spectrum of `samples`.
    ///
    /// The spectrum covers the first `⌊N/2⌋` bins of the unnormalized
    /// forward DFT, with frequencies linearly spaced over `[0, Nyquist]`.
    pub fn magnitude_spectrum(
        &self,
        samples: &[f32],
        sample_rate: u32,
    ) -> Result<Spectrum, AnalysisError> {
        if samples.len() < MIN_BUFFER_LEN {
            return Err(AnalysisError::BufferTooShort { got: samples.len() });
        }
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidSampleRate);
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(AnalysisError::NonFiniteSample { index });
        }

        let n = samples.len();
        let mut buffer: Vec<Complex<f32>> = samples
            .iter()
            .map(|&re| Complex { re, im: 0.0 })
            .collect();

        // Plan per call so the analyzer itself stays free of mutable state.
        let mut planner = FftPlanner::<f32>::new();
        planner.plan_fft_forward(n).process(&mut buffer);

        let half = n / 2;
        let magnitudes = buffer[..half].iter().map(|c| c.norm()).collect();
        let frequencies = linspace_to_nyquist(sample_rate as f32 / 2.0, half);

        Ok(Spectrum {
            frequencies,
            magnitudes,
        })
    }

    /// Select the largest-magnitude peak, if any.
    ///
    /// A bin is a peak iff it is a strict local maximum and its magnitude
    /// reaches the threshold. The first and last bins have only one neighbor
    /// and never qualify.
    fn strongest_peak(&self, spectrum: &Spectrum) -> Option<PitchEstimate> {
        let mags = spectrum.magnitudes();
        let mut best: Option<usize> = None;

        for i in 1..mags.len().saturating_sub(1) {
            let m = mags[i];
            if m < self.peak_threshold || m <= mags[i - 1] || m <= mags[i + 1] {
                continue;
            }
            match best {
                Some(b) if mags[b] >= m => {}
                _ => best = Some(i),
            }
        }

        best.map(|i| PitchEstimate {
            frequency: spectrum.frequencies()[i],
        })
    }
}

impl Default for SpectralAnalyzer {
    fn default() -> Self {
        SpectralAnalyzer::new()
    }
}

/// `count` points linearly spaced from 0 to `nyquist` inclusive.
fn linspace_to_nyquist(nyquist: f32, count: usize) -> Vec<f32> {
    if count <= 1 {
        return vec![0.0; count];
    }
    let step = nyquist / (count - 1) as f32;
    (0..count).map(|i| i as f32 * step).collect()
}
