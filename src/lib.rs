//! # ECG DSP
//!
//! Heartbeat detection engine for 12-lead ECG recordings, providing
//! multi-lead R-peak detection with quality-scored fallback, rate
//! summarization, and anatomical region mapping.
//!
//! ## Features
//!
//! - **R-peak detection**: Pan-Tompkins pipeline (band-pass → derivative →
//!   square → integrate → peak search) per lead
//! - **Multi-lead fallback**: fixed priority scan (II, V1, V5, I, aVF) with
//!   a composite signal-quality model and a lead-II early exit
//! - **Rate summarization**: median-based BPM, RR intervals, beat timestamps
//! - **Region mapping**: condition probabilities → anatomical severity,
//!   colors, and activation timing for visualization
//!
//! ## Quick Start
//!
//! ```no_run
//! use ecg_dsp::{analyze_ecg, DetectorConfig, LeadMatrix};
//!
//! // 4096 samples x 12 leads at 400 Hz, row-major
//! let data: Vec<f32> = vec![0.0; 4096 * 12];
//! let record = LeadMatrix::from_flat(data, 4096, 12)?;
//!
//! let report = analyze_ecg(&record, &DetectorConfig::default())?;
//! println!("BPM: {:.1} from lead {} (quality {:.2})",
//!          report.bpm, report.lead_used, report.lead_quality);
//! # Ok::<(), ecg_dsp::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! 12-lead record → Fallback Orchestrator → (per lead) Filter → Detector
//!     → Quality Scorer → best-lead selection → Rate Summarizer → report
//! ```
//!
//! The core is single-threaded, deterministic, and allocation-per-call;
//! concurrent analyses share only the read-only configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod detection;
pub mod error;
pub mod regions;
pub mod signal;

// Re-export main types
pub use analysis::result::{DetectionResult, EcgAnalysis, RateSummary};
pub use analysis::summary::summarize;
pub use config::{DetectorConfig, LeadDescriptor, QualityWeights, DEFAULT_LEAD_PRIORITY};
pub use detection::fallback::detect;
pub use error::AnalysisError;
pub use signal::lead_matrix::LeadMatrix;

/// Run the full analysis: detection with multi-lead fallback, then rate
/// summarization, rounded for external reporting.
///
/// # Arguments
///
/// * `record` - samples × leads matrix (canonically 4096 × 12 at 400 Hz);
///   the service layer validates shape and numeric cleanliness before
///   calling in
/// * `config` - Detection parameters
///
/// # Returns
///
/// An [`EcgAnalysis`] report. A record where no lead is usable yields
/// `lead_used = "none"`, quality 0.0, and the default 60.0 BPM placeholder;
/// that is a valid "undetectable rhythm" result, not an error.
///
/// # Errors
///
/// Returns [`AnalysisError`] only for invalid configuration (filter band vs.
/// sampling rate, empty or out-of-range lead table) or degenerate input
/// shapes.
pub fn analyze_ecg(
    record: &LeadMatrix,
    config: &DetectorConfig,
) -> Result<EcgAnalysis, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting ECG analysis: {} samples x {} leads at {} Hz",
        record.num_samples(),
        record.num_leads(),
        config.sampling_rate_hz
    );

    let detection = detect(record, config)?;
    let summary = summarize(&detection, config.sampling_rate_hz);
    let report = EcgAnalysis::from_parts(&detection, &summary);

    log::debug!(
        "ECG analysis done in {:.2} ms: {} beats at {:.1} BPM from lead {} (quality {:.2}, fallback: {})",
        start_time.elapsed().as_secs_f32() * 1000.0,
        report.beat_count,
        report.bpm,
        report.lead_used,
        report.lead_quality,
        report.fallback_triggered
    );

    Ok(report)
}
