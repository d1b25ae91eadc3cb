//! Pan-Tompkins single-lead R-peak detection
//!
//! Classic QRS detection pipeline over one lead's waveform:
//!
//! 1. Band-pass filter (0.5–40 Hz, zero phase)
//! 2. First discrete derivative (approximates QRS slope)
//! 3. Squaring (emphasizes large deflections, discards sign)
//! 4. Moving-window integration, 150 ms wide (QRS energy envelope)
//! 5. Peak search with 200 ms minimum separation and 0.5×σ prominence
//!
//! The integration is a same-length convolution, so peak indices stay
//! aligned with the input waveform. An empty result is a valid outcome
//! for a flat or noise-only lead, not an error.
//!
//! # Reference
//!
//! Pan, J., & Tompkins, W. J. (1985). A Real-Time QRS Detection Algorithm.
//! *IEEE Transactions on Biomedical Engineering*, BME-32(3), 230-236.

use crate::config::DetectorConfig;
use crate::detection::peak_picking::find_peaks;
use crate::error::AnalysisError;
use crate::signal::bandpass::BandpassFilter;
use crate::signal::stats;

/// Detect candidate R-peak sample positions in a single lead.
///
/// # Arguments
///
/// * `signal` - One lead's raw waveform
/// * `config` - Detection parameters (sampling rate, band, windows)
///
/// # Returns
///
/// Ascending sample indices of candidate R-peaks; empty if nothing clears
/// the adaptive prominence threshold.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidConfig`] if the filter cannot be designed
/// for the configured band, or [`AnalysisError::InvalidInput`] if the signal
/// is shorter than the filter's minimum stable window.
pub fn detect_beats(signal: &[f32], config: &DetectorConfig) -> Result<Vec<usize>, AnalysisError> {
    let filter = BandpassFilter::design(
        config.sampling_rate_hz,
        config.band_low_hz,
        config.band_high_hz,
    )?;
    let filtered = filter.apply_zero_phase(signal)?;

    let derivative: Vec<f32> = filtered.windows(2).map(|w| w[1] - w[0]).collect();
    let squared: Vec<f32> = derivative.iter().map(|&x| x * x).collect();
    if squared.is_empty() {
        return Ok(vec![]);
    }

    let integrated = moving_window_integrate(&squared, config.integration_window_samples());

    let min_prominence = stats::std_dev(&integrated) * config.prominence_std_factor;
    let peaks = find_peaks(
        &integrated,
        config.min_peak_separation_samples(),
        min_prominence,
    );

    log::debug!(
        "Pan-Tompkins: {} samples -> {} candidate peaks (prominence >= {:.6})",
        signal.len(),
        peaks.len(),
        min_prominence
    );

    Ok(peaks)
}

/// Same-length moving average: centered convolution with a ones(w)/w kernel,
/// zero-padded at the edges so output indices align with the input.
fn moving_window_integrate(signal: &[f32], window: usize) -> Vec<f32> {
    let n = signal.len();
    let window = window.max(1);

    // Prefix sums; prefix[i] = sum of signal[..i]
    let mut prefix = Vec::with_capacity(n + 1);
    let mut acc = 0.0f32;
    prefix.push(acc);
    for &x in signal {
        acc += x;
        prefix.push(acc);
    }

    let offset = (window - 1) / 2;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let hi = (i + offset + 1).min(n);
        let lo = (i + offset).saturating_sub(window - 1);
        out.push((prefix[hi] - prefix[lo]) / window as f32);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Periodic QRS-like Gaussian pulse train, the shape the integrated
    /// envelope is designed to pick up.
    fn pulse_train(bpm: f32, fs: f32, n: usize, amplitude: f32) -> Vec<f32> {
        let mut signal = vec![0.0f32; n];
        let interval = (60.0 / bpm * fs) as usize;
        let sigma = 10.0f32;
        let mut center = interval / 2;
        while center < n {
            let lo = center.saturating_sub(25);
            let hi = (center + 25).min(n - 1);
            for i in lo..=hi {
                let t = (i as f32 - center as f32) / sigma;
                signal[i] += amplitude * (-0.5 * t * t).exp();
            }
            center += interval;
        }
        signal
    }

    #[test]
    fn test_detects_72_bpm_train() {
        let config = DetectorConfig::default();
        let signal = pulse_train(72.0, 400.0, 4096, 1.5);
        let peaks = detect_beats(&signal, &config).unwrap();

        // 10.24 s at 72 BPM is ~12.3 beats
        assert!(
            (11..=13).contains(&peaks.len()),
            "Expected 11-13 beats, got {}",
            peaks.len()
        );

        // Intervals should cluster near 60/72 s = 333 samples
        let intervals: Vec<usize> = peaks.windows(2).map(|w| w[1] - w[0]).collect();
        for &rr in &intervals {
            assert!(
                (300..=370).contains(&rr),
                "RR interval {} samples far from expected 333",
                rr
            );
        }
    }

    #[test]
    fn test_flat_lead_yields_no_peaks() {
        let config = DetectorConfig::default();
        let signal = vec![0.0f32; 4096];
        let peaks = detect_beats(&signal, &config).unwrap();
        assert!(peaks.is_empty());
    }

    #[test]
    fn test_min_separation_invariant() {
        let config = DetectorConfig::default();
        let signal = pulse_train(180.0, 400.0, 4096, 1.2);
        let peaks = detect_beats(&signal, &config).unwrap();
        let min_gap = config.min_peak_separation_samples();
        assert!(peaks.windows(2).all(|w| w[1] - w[0] >= min_gap));
    }

    #[test]
    fn test_deterministic() {
        let config = DetectorConfig::default();
        let signal = pulse_train(72.0, 400.0, 4096, 1.5);
        let a = detect_beats(&signal, &config).unwrap();
        let b = detect_beats(&signal, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_sampling_rate_propagates() {
        let config = DetectorConfig {
            sampling_rate_hz: 80.0,
            ..Default::default()
        };
        let signal = pulse_train(72.0, 80.0, 1024, 1.5);
        assert!(matches!(
            detect_beats(&signal, &config),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_moving_window_integrate_alignment() {
        // Impulse stays centered after same-mode integration
        let mut signal = vec![0.0f32; 101];
        signal[50] = 1.0;
        let out = moving_window_integrate(&signal, 5);
        assert_eq!(out.len(), signal.len());
        // Window of 5 spreads the impulse over indices 48..=52
        for i in 48..=52 {
            assert!((out[i] - 0.2).abs() < 1e-6, "out[{}] = {}", i, out[i]);
        }
        assert_eq!(out[46], 0.0);
        assert_eq!(out[54], 0.0);
    }

    #[test]
    fn test_moving_window_integrate_constant() {
        let signal = vec![2.0f32; 64];
        let out = moving_window_integrate(&signal, 8);
        // Interior values average to the constant
        for &v in &out[8..56] {
            assert!((v - 2.0).abs() < 1e-5);
        }
    }
}
