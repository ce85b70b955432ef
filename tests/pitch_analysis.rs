//! Integration tests for the spectral analysis pipeline using synthesized
//! buffers.

use std::f32::consts::PI;

use pitch_tuner::{
    analyze_pitch, AnalysisError, NoteName, SpectralAnalyzer, TuningFeedback,
};

/// Pure sinusoid of `frequency` Hz at unit amplitude.
fn sine(frequency: f32, sample_rate: u32, len: usize) -> Vec<f32> {
    scaled_sine(frequency, sample_rate, len, 1.0)
}

fn scaled_sine(frequency: f32, sample_rate: u32, len: usize, amplitude: f32) -> Vec<f32> {
    (0..len)
        .map(|i| amplitude * (2.0 * PI * frequency * i as f32 / sample_rate as f32).sin())
        .collect()
}

/// Spacing between adjacent spectrum bins for an `n`-sample buffer.
fn bin_width(sample_rate: u32, n: usize) -> f32 {
    (sample_rate as f32 / 2.0) / (n / 2 - 1) as f32
}

#[test]
fn detects_pure_sinusoid_within_one_bin() {
    let sample_rate = 4096;
    let n = 4096;
    let samples = sine(440.0, sample_rate, n);

    let analysis = analyze_pitch(&samples, sample_rate).unwrap();

    assert!((analysis.frequency - 440.0).abs() <= bin_width(sample_rate, n));
    assert_eq!(analysis.note, NoteName::A);
    assert_eq!(analysis.octave, 4);
    assert_eq!(analysis.feedback, TuningFeedback::InTune);
}

#[test]
fn detects_off_bin_sinusoid() {
    // C5 does not land on a bin center; the leaked main lobe must still win.
    let sample_rate = 8192;
    let n = 8192;
    let samples = sine(523.251, sample_rate, n);

    let analysis = analyze_pitch(&samples, sample_rate).unwrap();

    assert!((analysis.frequency - 523.251).abs() <= bin_width(sample_rate, n));
    assert_eq!(analysis.note, NoteName::C);
    assert_eq!(analysis.octave, 5);
}

#[test]
fn selects_globally_strongest_peak() {
    let sample_rate = 4096;
    let n = 4096;
    let weak = scaled_sine(330.0, sample_rate, n, 0.3);
    let strong = scaled_sine(660.0, sample_rate, n, 1.0);
    let samples: Vec<f32> = weak.iter().zip(&strong).map(|(a, b)| a + b).collect();

    let analysis = analyze_pitch(&samples, sample_rate).unwrap();

    assert!((analysis.frequency - 660.0).abs() <= bin_width(sample_rate, n));
}

#[test]
fn estimate_stays_below_nyquist() {
    let sample_rate = 4096;
    // A harmonically messy but finite buffer.
    let samples: Vec<f32> = (0..2048)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (2.0 * PI * 523.0 * t).sin() + 0.5 * (2.0 * PI * 1046.0 * t).sin() + 0.1
        })
        .collect();

    let analyzer = SpectralAnalyzer::new();
    if let Some(estimate) = analyzer.analyze(&samples, sample_rate).unwrap() {
        assert!(estimate.frequency >= 0.0);
        assert!(estimate.frequency <= sample_rate as f32 / 2.0);
    }
}

#[test]
fn all_zero_buffer_yields_no_pitch() {
    let samples = vec![0.0_f32; 1024];

    let err = analyze_pitch(&samples, 44_100).unwrap_err();

    assert!(matches!(err, AnalysisError::NoPitchDetected));
    assert!(!err.is_invalid_input());
    assert_eq!(
        err.to_string(),
        "Could not detect a clear pitch. Please play a single note."
    );
}

#[test]
fn dc_only_buffer_yields_no_pitch() {
    // All energy lands in bin 0, which has no left neighbor and therefore
    // never qualifies as a peak. Intended boundary policy.
    let samples = vec![1.0_f32; 256];

    let err = analyze_pitch(&samples, 44_100).unwrap_err();

    assert!(matches!(err, AnalysisError::NoPitchDetected));
}

#[test]
fn sub_threshold_signal_yields_no_pitch() {
    // Peak magnitude ~ amplitude * N / 2 = 0.032, under the 0.1 threshold.
    let samples = scaled_sine(8.0, 64, 64, 0.001);

    let analyzer = SpectralAnalyzer::new();
    assert!(analyzer.analyze(&samples, 64).unwrap().is_none());
}

#[test]
fn lowered_threshold_recovers_quiet_signal() {
    let samples = scaled_sine(8.0, 64, 64, 0.001);

    let analyzer = SpectralAnalyzer::builder()
        .peak_threshold(0.01)
        .build()
        .unwrap();

    let estimate = analyzer.analyze(&samples, 64).unwrap().unwrap();
    assert!((estimate.frequency - 8.0).abs() <= bin_width(64, 64));
}

#[test]
fn analyzer_config_is_debuggable() {
    // Config types must stay Debug so test assertions can unwrap around them.
    let analyzer = SpectralAnalyzer::builder()
        .peak_threshold(0.2)
        .build()
        .unwrap();
    assert!(format!("{analyzer:?}").contains("peak_threshold"));
}

#[test]
fn builder_rejects_bad_threshold() {
    let err = SpectralAnalyzer::builder()
        .peak_threshold(f32::NAN)
        .build()
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Configuration(_)));

    let err = SpectralAnalyzer::builder()
        .peak_threshold(-1.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Configuration(_)));
}

#[test]
fn empty_buffer_is_invalid_input() {
    let err = analyze_pitch(&[], 44_100).unwrap_err();

    assert!(matches!(err, AnalysisError::BufferTooShort { got: 0 }));
    assert!(err.is_invalid_input());
}

#[test]
fn single_sample_buffer_is_invalid_input() {
    let err = analyze_pitch(&[0.5], 44_100).unwrap_err();

    assert!(matches!(err, AnalysisError::BufferTooShort { got: 1 }));
}

#[test]
fn zero_sample_rate_is_invalid_input() {
    let samples = sine(440.0, 4096, 256);

    let err = analyze_pitch(&samples, 0).unwrap_err();

    assert!(matches!(err, AnalysisError::InvalidSampleRate));
}

#[test]
fn non_finite_sample_is_invalid_input() {
    let mut samples = sine(440.0, 4096, 256);
    samples[17] = f32::NAN;

    let err = analyze_pitch(&samples, 4096).unwrap_err();

    assert!(matches!(err, AnalysisError::NonFiniteSample { index: 17 }));
}

#[test]
fn spectrum_covers_half_the_buffer() {
    let sample_rate = 1000;
    let samples = sine(100.0, sample_rate, 512);

    let spectrum = SpectralAnalyzer::new()
        .magnitude_spectrum(&samples, sample_rate)
        .unwrap();

    assert_eq!(spectrum.len(), 256);
    assert_eq!(spectrum.bin(0).unwrap().0, 0.0);
    let (last_freq, _) = spectrum.bin(255).unwrap();
    assert!((last_freq - 500.0).abs() < 1e-3);
    assert!(spectrum.magnitudes().iter().all(|&m| m >= 0.0));
}

#[test]
fn analysis_response_json_shape() {
    let sample_rate = 4096;
    let samples = sine(440.0, sample_rate, 4096);

    let analysis = analyze_pitch(&samples, sample_rate).unwrap();
    let json = serde_json::to_value(analysis).unwrap();

    assert_eq!(json["note"], "A");
    assert_eq!(json["octave"], 4);
    assert_eq!(json["message"], "Perfectly in tune!");
    assert!(json["frequency"].is_number());
    assert!(json["cents"].is_number());
}
