//! Signal quality scoring
//!
//! Produces the 0.0–1.0 confidence score attached to each (lead, peaks)
//! pair, the system's only quantitative self-assessment of how trustworthy
//! a detection is. Deterministic and side-effect-free.
//!
//! # Score components
//!
//! 1. **Regularity** (weight 0.3): 1 − coefficient of variation of RR
//!    intervals. A regular rhythm has CV < 0.15; a chaotic one > 0.5.
//! 2. **Plausible rate** (weight 0.3): full credit for a median rate in
//!    30–200 BPM, half credit in the wider 20–250 BPM envelope.
//! 3. **Peak density** (weight 0.2): full credit for 0.3–3.5 peaks/s
//!    (≈18–210 BPM over the window), half credit otherwise.
//! 4. **Power** (weight 0.2): variance against a reference level,
//!    saturating at 1.0.
//!
//! Hard zeros short-circuit everything: fewer than 2 peaks (no rhythm to
//! assess) or sub-floor variance (flat/dead lead).

use crate::config::DetectorConfig;
use crate::signal::stats;

/// Neutral regularity sub-score when only one RR interval exists and
/// rhythm regularity cannot be assessed.
const SINGLE_INTERVAL_REGULARITY: f32 = 0.3;

/// Score the quality of detected R-peaks on a lead, in [0.0, 1.0].
///
/// # Arguments
///
/// * `signal` - The lead's raw (unfiltered) waveform
/// * `r_peaks` - Detected R-peak sample indices, ascending
/// * `config` - Thresholds, reference levels, and sub-score weights
pub fn assess_signal_quality(signal: &[f32], r_peaks: &[usize], config: &DetectorConfig) -> f32 {
    if r_peaks.len() < 2 {
        return 0.0;
    }

    let signal_power = stats::variance(signal);
    if signal_power < config.flat_lead_variance {
        // Flat/dead lead; nothing else matters
        return 0.0;
    }

    let rr_intervals: Vec<f32> = r_peaks.windows(2).map(|w| (w[1] - w[0]) as f32).collect();

    let regularity_score = if rr_intervals.len() < 2 {
        SINGLE_INTERVAL_REGULARITY
    } else {
        let rr_mean = stats::mean(&rr_intervals);
        let rr_std = stats::std_dev(&rr_intervals);
        let cv = if rr_mean > 0.0 { rr_std / rr_mean } else { 1.0 };
        (1.0 - cv).max(0.0)
    };

    // Median instantaneous rate across intervals
    let rates: Vec<f32> = rr_intervals
        .iter()
        .map(|&rr| 60.0 / (rr / config.sampling_rate_hz))
        .collect();
    let median_rate = stats::median(&rates);
    let rate_score = if (30.0..=200.0).contains(&median_rate) {
        1.0
    } else if (20.0..=250.0).contains(&median_rate) {
        0.5
    } else {
        0.0
    };

    // Peaks per second over the whole window; never zero, some signal was found
    let peak_density = r_peaks.len() as f32 / (signal.len() as f32 / config.sampling_rate_hz);
    let density_score = if (0.3..=3.5).contains(&peak_density) {
        1.0
    } else {
        0.5
    };

    let power_score = (signal_power / config.power_reference).min(1.0);

    let w = &config.quality_weights;
    let quality = w.regularity * regularity_score
        + w.rate * rate_score
        + w.density * density_score
        + w.power * power_score;

    quality.clamp(0.0, 1.0)
}
