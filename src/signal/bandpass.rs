//! Zero-phase Butterworth band-pass filter
//!
//! Isolates the 0.5–40 Hz band where QRS energy lives. The band-pass is a
//! cascade of second-order Butterworth high-pass and low-pass sections
//! (bilinear transform), applied forward and then backward (`filtfilt`
//! style) so peak timing is not shifted by filter group delay.
//!
//! Coefficients and state are computed in `f64`; the public interface stays
//! `f32` like the rest of the pipeline.

use crate::error::AnalysisError;

/// Signals shorter than this cannot be filtered stably; the fixed
/// 4096-sample record contract keeps real inputs far above it.
const MIN_SIGNAL_LEN: usize = 32;

/// Coefficients of one second-order IIR section (Direct Form I,
/// normalized so a0 = 1).
#[derive(Debug, Clone, Copy)]
struct Biquad {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
}

impl Biquad {
    /// Second-order Butterworth low-pass (bilinear transform).
    fn lowpass(fs: f64, fc: f64) -> Self {
        let wc = (std::f64::consts::PI * fc / fs).tan();
        let wc2 = wc * wc;
        let sqrt2 = std::f64::consts::SQRT_2;
        let k = 1.0 + sqrt2 * wc + wc2;
        Self {
            b0: wc2 / k,
            b1: 2.0 * wc2 / k,
            b2: wc2 / k,
            a1: 2.0 * (wc2 - 1.0) / k,
            a2: (1.0 - sqrt2 * wc + wc2) / k,
        }
    }

    /// Second-order Butterworth high-pass (bilinear transform).
    fn highpass(fs: f64, fc: f64) -> Self {
        let wc = (std::f64::consts::PI * fc / fs).tan();
        let wc2 = wc * wc;
        let sqrt2 = std::f64::consts::SQRT_2;
        let k = 1.0 + sqrt2 * wc + wc2;
        Self {
            b0: 1.0 / k,
            b1: -2.0 / k,
            b2: 1.0 / k,
            a1: 2.0 * (wc2 - 1.0) / k,
            a2: (1.0 - sqrt2 * wc + wc2) / k,
        }
    }

    /// Apply the section once, forward (Direct Form I, zero initial state).
    fn apply(&self, signal: &[f64]) -> Vec<f64> {
        let n = signal.len();
        let mut out = vec![0.0f64; n];
        for i in 0..n {
            let x0 = signal[i];
            let x1 = if i >= 1 { signal[i - 1] } else { 0.0 };
            let x2 = if i >= 2 { signal[i - 2] } else { 0.0 };
            let y1 = if i >= 1 { out[i - 1] } else { 0.0 };
            let y2 = if i >= 2 { out[i - 2] } else { 0.0 };
            out[i] = self.b0 * x0 + self.b1 * x1 + self.b2 * x2 - self.a1 * y1 - self.a2 * y2;
        }
        out
    }
}

/// Second-order zero-phase band-pass filter.
#[derive(Debug, Clone)]
pub struct BandpassFilter {
    highpass: Biquad,
    lowpass: Biquad,
}

impl BandpassFilter {
    /// Design the filter for a sampling rate and band `[low_hz, high_hz]`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] when the coefficients would
    /// be numerically degenerate: non-positive sampling rate, band edges out
    /// of order, or `high_hz` at or above Nyquist (e.g., a 40 Hz edge with
    /// fs ≤ 80 Hz). Failing fast here is the contract; the filter never
    /// silently returns garbage.
    pub fn design(
        sampling_rate_hz: f32,
        low_hz: f32,
        high_hz: f32,
    ) -> Result<Self, AnalysisError> {
        let fs = sampling_rate_hz as f64;
        let low = low_hz as f64;
        let high = high_hz as f64;

        if fs <= 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "Sampling rate must be positive, got {}",
                sampling_rate_hz
            )));
        }
        if low <= 0.0 || high <= low {
            return Err(AnalysisError::InvalidConfig(format!(
                "Band edges must satisfy 0 < low < high, got [{}, {}]",
                low_hz, high_hz
            )));
        }
        if high >= fs / 2.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "High band edge {} Hz at or above Nyquist ({} Hz)",
                high_hz,
                sampling_rate_hz / 2.0
            )));
        }

        Ok(Self {
            highpass: Biquad::highpass(fs, low),
            lowpass: Biquad::lowpass(fs, high),
        })
    }

    /// Filter a waveform forward and backward (zero phase).
    ///
    /// Returns a same-length waveform. Input must be at least a few dozen
    /// samples long for the IIR state to settle.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInput`] if the signal is shorter than
    /// the minimum stable window.
    pub fn apply_zero_phase(&self, signal: &[f32]) -> Result<Vec<f32>, AnalysisError> {
        if signal.len() < MIN_SIGNAL_LEN {
            return Err(AnalysisError::InvalidInput(format!(
                "Signal length {} below filter minimum of {}",
                signal.len(),
                MIN_SIGNAL_LEN
            )));
        }

        let forward: Vec<f64> = signal.iter().map(|&x| x as f64).collect();
        let forward = self.lowpass.apply(&self.highpass.apply(&forward));

        // Zero-phase: reverse, filter again, reverse back.
        let mut backward: Vec<f64> = forward.into_iter().rev().collect();
        backward = self.lowpass.apply(&self.highpass.apply(&backward));
        backward.reverse();

        Ok(backward.into_iter().map(|x| x as f32).collect())
    }
}
