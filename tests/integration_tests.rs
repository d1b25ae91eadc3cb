//! Integration tests for the ECG analysis engine
//!
//! End-to-end checks on synthetic 12-lead records: a QRS-like Gaussian
//! pulse train at a known rate, with selected leads optionally replaced by
//! near-zero-variance noise to exercise the fallback path.

use ecg_dsp::{analyze_ecg, detect, summarize, DetectorConfig, LeadMatrix};

/// One lead of 72 BPM-style periodic QRS pulses: Gaussian bumps ~50 samples
/// wide, the morphology the Pan-Tompkins envelope is tuned for.
fn qrs_lead(bpm: f32, fs: f32, n: usize, amplitude: f32) -> Vec<f32> {
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

/// Deterministic near-flat noise, variance well under the dead-lead floor.
fn dead_lead(n: usize) -> Vec<f32> {
    (0..n).map(|i| (i as f32 * 1.7).sin() * 0.005).collect()
}

/// 10.24 s, 400 Hz, 12-lead record; leads listed in `dead` carry only
/// near-flat noise, all others carry the pulse train.
fn synthetic_record(bpm: f32, dead: &[usize]) -> LeadMatrix {
    let columns: Vec<Vec<f32>> = (0..12)
        .map(|lead| {
            if dead.contains(&lead) {
                dead_lead(4096)
            } else {
                qrs_lead(bpm, 400.0, 4096, 1.5)
            }
        })
        .collect();
    LeadMatrix::from_columns(&columns).unwrap()
}

#[test]
fn test_clean_record_end_to_end() {
    let config = DetectorConfig::default();
    let record = synthetic_record(72.0, &[]);

    let result = detect(&record, &config).expect("detection should succeed");
    assert_eq!(result.lead_used, "II");
    assert!(!result.fallback_triggered);
    assert!(
        result.quality > 0.8,
        "Clean lead II should be excellent, got {:.3}",
        result.quality
    );
    assert!(
        (11..=13).contains(&result.beat_positions.len()),
        "Expected 11-13 beats in 10.24 s at 72 BPM, got {}",
        result.beat_positions.len()
    );

    let summary = summarize(&result, config.sampling_rate_hz);
    assert!(
        (68.0..=76.0).contains(&summary.bpm),
        "BPM should be within a couple of 72, got {:.2}",
        summary.bpm
    );
    assert_eq!(summary.beat_count, result.beat_positions.len());
    assert_eq!(summary.rr_intervals_ms.len(), summary.beat_count - 1);
}

#[test]
fn test_bpm_within_two_of_known_rate() {
    let config = DetectorConfig::default();
    for &bpm in &[60.0f32, 72.0, 90.0, 120.0] {
        let record = synthetic_record(bpm, &[]);
        let result = detect(&record, &config).unwrap();
        let summary = summarize(&result, config.sampling_rate_hz);
        assert!(
            (summary.bpm - bpm).abs() <= 2.0,
            "Expected ~{} BPM, got {:.2}",
            bpm,
            summary.bpm
        );
    }
}

#[test]
fn test_beat_positions_strictly_increasing_with_min_gap() {
    let config = DetectorConfig::default();
    let min_gap = config.min_peak_separation_samples();
    for dead in [vec![], vec![1], vec![1, 6, 10]] {
        let record = synthetic_record(72.0, &dead);
        let result = detect(&record, &config).unwrap();
        assert!(
            result
                .beat_positions
                .windows(2)
                .all(|w| w[0] < w[1] && w[1] - w[0] >= min_gap),
            "Positions must be strictly increasing with gaps >= {} samples",
            min_gap
        );
    }
}

#[test]
fn test_dead_lead_ii_triggers_fallback() {
    let config = DetectorConfig::default();
    // Lead II (column 1) replaced with near-zero-variance noise
    let record = synthetic_record(72.0, &[1]);
    let result = detect(&record, &config).unwrap();
    assert!(result.fallback_triggered);
    assert_ne!(result.lead_used, "II");
    assert!(!result.beat_positions.is_empty());
}

#[test]
fn test_falls_through_to_limb_leads() {
    let config = DetectorConfig::default();
    // II, V1, V5 all dead; the limb-lead backups must carry the detection
    let record = synthetic_record(72.0, &[1, 6, 10]);
    let result = detect(&record, &config).unwrap();
    assert!(result.fallback_triggered);
    assert!(
        result.lead_used == "I" || result.lead_used == "aVF",
        "Expected lead I or aVF, got {}",
        result.lead_used
    );
}

#[test]
fn test_all_leads_dead_is_reportable_not_error() {
    let config = DetectorConfig::default();
    let record = synthetic_record(72.0, &(0..12).collect::<Vec<_>>());
    let result = detect(&record, &config).expect("undetectable rhythm is not an error");
    assert_eq!(result.lead_used, "none");
    assert_eq!(result.quality, 0.0);
    assert!(result.beat_positions.is_empty());
    assert!(result.fallback_triggered);

    // Summarize degrades to documented defaults, no NaN, no crash
    let summary = summarize(&result, config.sampling_rate_hz);
    assert_eq!(summary.bpm, 60.0);
    assert!(summary.rr_intervals_ms.is_empty());
    assert_eq!(summary.beat_count, 0);
}

#[test]
fn test_quality_zero_below_two_beats() {
    use ecg_dsp::detection::quality::assess_signal_quality;
    let config = DetectorConfig::default();
    let lead = qrs_lead(72.0, 400.0, 4096, 1.5);
    assert_eq!(assess_signal_quality(&lead, &[], &config), 0.0);
    assert_eq!(assess_signal_quality(&lead, &[500], &config), 0.0);
    assert_eq!(assess_signal_quality(&dead_lead(4096), &[], &config), 0.0);
}

#[test]
fn test_detect_is_idempotent() {
    let config = DetectorConfig::default();
    let record = synthetic_record(72.0, &[6]);
    let first = detect(&record, &config).unwrap();
    let second = detect(&record, &config).unwrap();
    assert_eq!(first.beat_positions, second.beat_positions);
    assert_eq!(first.lead_used, second.lead_used);
    assert_eq!(first.quality, second.quality);
    assert_eq!(first.fallback_triggered, second.fallback_triggered);
}

#[test]
fn test_analyze_ecg_rounded_report() {
    let config = DetectorConfig::default();
    let record = synthetic_record(72.0, &[]);
    let report = analyze_ecg(&record, &config).unwrap();

    assert_eq!(report.lead_used, "II");
    assert!(!report.fallback_triggered);
    assert!(report.lead_quality > 0.8);
    assert!((68.0..=76.0).contains(&report.bpm));
    assert!((11..=13).contains(&report.beat_count));

    // Reported values are rounded: 1 dp for ms/BPM, 2 dp for seconds
    for &rr in &report.rr_intervals_ms {
        assert!((rr * 10.0 - (rr * 10.0).round()).abs() < 1e-3);
    }
    for &t in &report.beat_timestamps_s {
        assert!((t * 100.0 - (t * 100.0).round()).abs() < 1e-2);
        assert!((0.0..=10.24).contains(&t));
    }
}

#[test]
fn test_nyquist_violation_is_config_error() {
    let config = DetectorConfig {
        sampling_rate_hz: 80.0,
        ..Default::default()
    };
    let record = synthetic_record(72.0, &[]);
    let result = analyze_ecg(&record, &config);
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("Nyquist"),
        "Error should name the Nyquist violation: {}",
        message
    );
}

#[test]
fn test_narrow_record_skips_missing_leads() {
    let config = DetectorConfig::default();
    // 8 columns: V5 (index 10) doesn't exist and must be skipped silently
    let columns: Vec<Vec<f32>> = (0..8)
        .map(|lead| {
            if lead == 1 {
                dead_lead(4096)
            } else {
                qrs_lead(72.0, 400.0, 4096, 1.5)
            }
        })
        .collect();
    let record = LeadMatrix::from_columns(&columns).unwrap();
    let result = detect(&record, &config).unwrap();
    assert!(result.fallback_triggered);
    // With II dead and V5 absent, V1 is the first strong candidate
    assert_eq!(result.lead_used, "V1");
}

#[test]
fn test_region_mapping_consumes_detection_output() {
    use ecg_dsp::regions::{activation_sequence, region_health, Condition, HeartRegion};

    // Downstream flow: classifier probabilities -> region health map
    let predictions = vec![
        (Condition::Rbbb, 0.89),
        (Condition::SinusTachycardia, 0.18),
        (Condition::AtrialFibrillation, 0.05),
    ];
    let health = region_health(&predictions);
    assert_eq!(health.len(), 10);

    let rbb = health
        .iter()
        .find(|h| h.region == HeartRegion::RightBundleBranch)
        .unwrap();
    assert!((rbb.severity - 0.89).abs() < 1e-3);
    assert_eq!(rbb.activation_delay_ms, 320.0);
    // High severity renders deep red
    assert_eq!(rbb.color, [1.0, 0.0, 0.0]);

    let sequence = activation_sequence(&health);
    assert_eq!(sequence[0].0, HeartRegion::SaNode);
    assert!(sequence.windows(2).all(|w| w[0].1 <= w[1].1));
}
