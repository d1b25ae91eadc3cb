//! Rate and interval summarization
//!
//! Converts beat positions into clinical units: BPM, RR intervals in
//! milliseconds, and beat timestamps in seconds. BPM is the *median* of the
//! per-interval instantaneous rates, so a single misdetected or extra beat
//! cannot skew the estimate the way a mean would.

use crate::analysis::result::{DetectionResult, RateSummary};
use crate::signal::stats;

/// Default BPM reported when fewer than 2 beats exist. A neutral
/// placeholder, not an error; downstream consumers treat the empty
/// interval list as "undetectable rhythm".
pub const DEFAULT_BPM: f32 = 60.0;

/// Summarize a detection into rate and interval statistics.
///
/// # Arguments
///
/// * `detection` - Detection result whose beat positions to summarize
/// * `sampling_rate_hz` - Sampling rate the positions are indexed against
///
/// # Returns
///
/// A full-precision [`RateSummary`]; rounding belongs to the reporting
/// boundary, never here.
pub fn summarize(detection: &DetectionResult, sampling_rate_hz: f32) -> RateSummary {
    let positions = &detection.beat_positions;

    let beat_timestamps_s: Vec<f32> = positions
        .iter()
        .map(|&p| p as f32 / sampling_rate_hz)
        .collect();

    if positions.len() < 2 {
        return RateSummary {
            bpm: DEFAULT_BPM,
            rr_intervals_ms: vec![],
            beat_timestamps_s,
            beat_count: positions.len(),
        };
    }

    let rr_intervals_ms: Vec<f32> = positions
        .windows(2)
        .map(|w| (w[1] - w[0]) as f32 / sampling_rate_hz * 1000.0)
        .collect();

    let rates: Vec<f32> = rr_intervals_ms.iter().map(|&rr| 60000.0 / rr).collect();
    let bpm = stats::median(&rates);

    RateSummary {
        bpm,
        rr_intervals_ms,
        beat_timestamps_s,
        beat_count: positions.len(),
    }
}
