//! Multi-lead fallback orchestration
//!
//! Runs the single-lead detector and quality scorer over a fixed lead
//! priority order (II, V1, V5, I, aVF) and selects the best usable result.
//!
//! Rules, in order:
//! - Leads whose column does not exist in the input are skipped.
//! - The best result so far is tracked with a strict `>` comparison, so an
//!   earlier (higher-priority) lead wins an exact quality tie.
//! - Lead II at quality above the early-exit bar terminates the scan
//!   immediately with `fallback_triggered = false`. This is the only early
//!   exit; lead II is the clinically privileged rhythm lead and an excellent
//!   lower-priority lead does not short-circuit the scan.
//! - Once any non-II lead has been evaluated, `fallback_triggered` stays
//!   true for the rest of the run, regardless of which lead wins.
//!
//! "No good lead found" is a reportable result (lead "none", quality 0.0,
//! empty peaks), never an error. Errors are reserved for invalid
//! configuration and degenerate input shapes.

use crate::analysis::result::DetectionResult;
use crate::config::DetectorConfig;
use crate::detection::pan_tompkins::detect_beats;
use crate::detection::quality::assess_signal_quality;
use crate::error::AnalysisError;
use crate::signal::lead_matrix::LeadMatrix;

/// Detect R-peaks across a multi-lead record with quality-scored fallback.
///
/// # Arguments
///
/// * `record` - samples × leads matrix (canonically 4096 × 12)
/// * `config` - Detection parameters and lead priority table
///
/// # Returns
///
/// One [`DetectionResult`]: the winning lead's beat positions, its name,
/// its quality score, and whether fallback was triggered.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidConfig`] for an unusable configuration
/// (bad filter band, empty priority table, or no configured lead present in
/// the input), and [`AnalysisError::InvalidInput`] if a lead is shorter than
/// the filter's minimum stable window.
pub fn detect(record: &LeadMatrix, config: &DetectorConfig) -> Result<DetectionResult, AnalysisError> {
    config.validate()?;

    let mut best_peaks: Option<Vec<usize>> = None;
    let mut best_quality = 0.0f32;
    let mut best_lead_name = "";
    let mut fallback_triggered = false;
    let mut leads_tried = 0usize;

    for descriptor in &config.lead_priority {
        let signal = match record.lead(descriptor.index) {
            Some(signal) => signal,
            None => {
                log::debug!(
                    "Lead {} (index {}) not present in {}-lead input, skipping",
                    descriptor.name,
                    descriptor.index,
                    record.num_leads()
                );
                continue;
            }
        };
        leads_tried += 1;

        let r_peaks = detect_beats(&signal, config)?;
        let quality = assess_signal_quality(&signal, &r_peaks, config);

        log::debug!(
            "Lead {}: {} peaks, quality {:.3}",
            descriptor.name,
            r_peaks.len(),
            quality
        );

        // Strict > keeps the earlier-priority lead on an exact tie
        if quality > best_quality {
            best_quality = quality;
            best_lead_name = descriptor.name;
            best_peaks = Some(r_peaks.clone());
        }

        // Early exit only for the gold-standard lead
        if descriptor.name == "II" && quality > config.early_exit_quality {
            return Ok(DetectionResult {
                beat_positions: r_peaks,
                lead_used: descriptor.name.to_string(),
                quality,
                fallback_triggered: false,
            });
        }

        // Past lead II, fallback has been paid for; it stays set
        if descriptor.name != "II" {
            fallback_triggered = true;
        }
    }

    if leads_tried == 0 {
        return Err(AnalysisError::InvalidConfig(format!(
            "No configured lead exists in a {}-lead input",
            record.num_leads()
        )));
    }

    match best_peaks {
        Some(beat_positions) => Ok(DetectionResult {
            beat_positions,
            lead_used: best_lead_name.to_string(),
            quality: best_quality,
            fallback_triggered,
        }),
        None => {
            log::warn!("No usable lead found; returning empty detection");
            Ok(DetectionResult {
                beat_positions: vec![],
                lead_used: "none".to_string(),
                quality: 0.0,
                fallback_triggered: true,
            })
        }
    }
}
