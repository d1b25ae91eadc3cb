//! Analysis result types
//!
//! Plain immutable records; nothing downstream mutates them after creation.

use serde::{Deserialize, Serialize};

/// Outcome of one full multi-lead detection call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Detected R-peak sample indices, strictly increasing
    pub beat_positions: Vec<usize>,

    /// Clinical name of the lead the result came from ("none" if no lead
    /// was usable)
    pub lead_used: String,

    /// Quality score of the winning lead, 0.0–1.0
    pub quality: f32,

    /// True when the selected lead is not the top-priority lead, or when
    /// any lower-priority lead had to be evaluated because the top lead
    /// did not meet the early-exit bar
    pub fallback_triggered: bool,
}

/// Rate and interval summary derived from a [`DetectionResult`].
///
/// Values carry full precision; rounding happens only in [`EcgAnalysis`],
/// the reporting boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSummary {
    /// Median instantaneous heart rate in BPM (60.0 default below 2 beats)
    pub bpm: f32,

    /// Inter-beat (RR) intervals in milliseconds
    pub rr_intervals_ms: Vec<f32>,

    /// Beat timestamps in seconds from the start of the record
    pub beat_timestamps_s: Vec<f32>,

    /// Number of detected beats
    pub beat_count: usize,
}

/// Rounded external report combining detection and rate summary.
///
/// This is the shape handed to the service layer: milliseconds and BPM at
/// 1 decimal, seconds at 2 decimals, quality at 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcgAnalysis {
    /// Median heart rate in BPM, 1 decimal
    pub bpm: f32,

    /// RR intervals in milliseconds, 1 decimal each
    pub rr_intervals_ms: Vec<f32>,

    /// Beat timestamps in seconds, 2 decimals each
    pub beat_timestamps_s: Vec<f32>,

    /// Number of detected beats
    pub beat_count: usize,

    /// Lead the detection came from
    pub lead_used: String,

    /// Quality of the winning lead, 2 decimals
    pub lead_quality: f32,

    /// Whether multi-lead fallback was triggered
    pub fallback_triggered: bool,
}

impl EcgAnalysis {
    /// Build the rounded report from a detection and its summary.
    pub fn from_parts(detection: &DetectionResult, summary: &RateSummary) -> Self {
        Self {
            bpm: round_to(summary.bpm, 1),
            rr_intervals_ms: summary
                .rr_intervals_ms
                .iter()
                .map(|&rr| round_to(rr, 1))
                .collect(),
            beat_timestamps_s: summary
                .beat_timestamps_s
                .iter()
                .map(|&t| round_to(t, 2))
                .collect(),
            beat_count: summary.beat_count,
            lead_used: detection.lead_used.clone(),
            lead_quality: round_to(detection.quality, 2),
            fallback_triggered: detection.fallback_triggered,
        }
    }
}

/// Round to a fixed number of decimal places (reporting boundary only).
fn round_to(value: f32, decimals: u32) -> f32 {
    let factor = 10f32.powi(decimals as i32);
    (value * factor).round() / factor
}
