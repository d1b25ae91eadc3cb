//! Example: analyze a synthetic 12-lead ECG record
//!
//! Builds a 10.24-second, 400 Hz record with a 72 BPM QRS pulse train,
//! runs the full analysis, and prints the report as JSON the way the
//! service layer would ship it.

use ecg_dsp::regions::{activation_sequence, region_health, Condition};
use ecg_dsp::{analyze_ecg, DetectorConfig, LeadMatrix};

fn qrs_lead(bpm: f32, fs: f32, n: usize, amplitude: f32) -> Vec<f32> {
    let mut signal = vec![0.0f32; n];
    let interval = (60.0 / bpm * fs) as usize;
    let mut center = interval / 2;
    while center < n {
        let lo = center.saturating_sub(25);
        let hi = (center + 25).min(n - 1);
        for i in lo..=hi {
            let t = (i as f32 - center as f32) / 10.0;
            signal[i] += amplitude * (-0.5 * t * t).exp();
        }
        center += interval;
    }
    signal
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // 12 identical leads is good enough for a demo record
    let columns: Vec<Vec<f32>> = (0..12).map(|_| qrs_lead(72.0, 400.0, 4096, 1.5)).collect();
    let record = LeadMatrix::from_columns(&columns)?;

    let config = DetectorConfig::default();
    let report = analyze_ecg(&record, &config)?;

    println!("Heart rate report:");
    println!("{}", serde_json::to_string_pretty(&report)?);

    // Region mapping over example classifier output
    let predictions = vec![
        (Condition::Rbbb, 0.89),
        (Condition::SinusBradycardia, 0.12),
        (Condition::SinusTachycardia, 0.18),
    ];
    let health = region_health(&predictions);
    println!("\nRegion health:");
    println!("{}", serde_json::to_string_pretty(&health)?);

    println!("\nActivation sequence:");
    for (region, delay_ms) in activation_sequence(&health) {
        println!("  {:?} @ {:.1} ms", region, delay_ms);
    }

    Ok(())
}
