//! Configuration parameters for ECG analysis

use crate::error::AnalysisError;

/// One entry of the lead priority table: which column of the 12-lead matrix
/// to try, and its clinical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadDescriptor {
    /// Column index into the samples×leads matrix
    pub index: usize,
    /// Clinical lead name (e.g., "II", "V1")
    pub name: &'static str,
}

/// Default lead priority order for R-peak detection.
///
/// Lead II is the gold standard for rhythm analysis; V1 and V5 have strong
/// ventricular signals; I and aVF are limb-lead backups. Trial order is the
/// array order.
pub const DEFAULT_LEAD_PRIORITY: [LeadDescriptor; 5] = [
    LeadDescriptor { index: 1, name: "II" },
    LeadDescriptor { index: 6, name: "V1" },
    LeadDescriptor { index: 10, name: "V5" },
    LeadDescriptor { index: 0, name: "I" },
    LeadDescriptor { index: 7, name: "aVF" },
];

/// Sub-score weights for the signal quality model.
///
/// The four weights sum to 1.0 in the default configuration; the combined
/// score is clamped to [0, 1] regardless.
#[derive(Debug, Clone, Copy)]
pub struct QualityWeights {
    /// Weight of rhythm regularity (1 − CV of RR intervals)
    pub regularity: f32,
    /// Weight of physiological heart-rate plausibility
    pub rate: f32,
    /// Weight of peak density (peaks per second)
    pub density: f32,
    /// Weight of signal power (variance vs. reference level)
    pub power: f32,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            regularity: 0.3,
            rate: 0.3,
            density: 0.2,
            power: 0.2,
        }
    }
}

/// Detection configuration parameters
///
/// All constants of the pipeline are exposed here as named fields so tests
/// can vary them; the defaults are the canonical production values for
/// 400 Hz, 4096-sample, 12-lead records.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Sampling rate in Hz (default: 400.0)
    pub sampling_rate_hz: f32,

    /// Band-pass low cutoff in Hz (default: 0.5)
    pub band_low_hz: f32,

    /// Band-pass high cutoff in Hz (default: 40.0)
    ///
    /// The sampling rate must exceed twice this value (Nyquist), otherwise
    /// filter design fails with [`AnalysisError::InvalidConfig`].
    pub band_high_hz: f32,

    /// Moving-window integration width in milliseconds (default: 150.0)
    /// Captures the QRS energy envelope.
    pub integration_window_ms: f32,

    /// Minimum horizontal separation between peaks in milliseconds
    /// (default: 200.0, the physiological ceiling of 300 BPM)
    pub min_peak_separation_ms: f32,

    /// Peak prominence threshold as a multiple of the integrated signal's
    /// standard deviation (default: 0.5, adaptive noise floor)
    pub prominence_std_factor: f32,

    /// Quality bar for the lead-II early exit (default: 0.8, strict `>`)
    pub early_exit_quality: f32,

    /// Variance below which a lead is considered flat/dead and scored 0.0
    /// (default: 0.001)
    pub flat_lead_variance: f32,

    /// Variance level at which the power sub-score saturates at 1.0
    /// (default: 0.1)
    pub power_reference: f32,

    /// Quality sub-score weights (default: 0.3/0.3/0.2/0.2)
    pub quality_weights: QualityWeights,

    /// Lead trial order (default: II, V1, V5, I, aVF)
    pub lead_priority: Vec<LeadDescriptor>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            sampling_rate_hz: 400.0,
            band_low_hz: 0.5,
            band_high_hz: 40.0,
            integration_window_ms: 150.0,
            min_peak_separation_ms: 200.0,
            prominence_std_factor: 0.5,
            early_exit_quality: 0.8,
            flat_lead_variance: 0.001,
            power_reference: 0.1,
            quality_weights: QualityWeights::default(),
            lead_priority: DEFAULT_LEAD_PRIORITY.to_vec(),
        }
    }
}

impl DetectorConfig {
    /// Validate the configuration before running detection.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] if the sampling rate cannot
    /// support the configured band (Nyquist), the band edges are degenerate,
    /// or the lead priority table is empty.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.sampling_rate_hz <= 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "Sampling rate must be positive, got {}",
                self.sampling_rate_hz
            )));
        }
        if self.band_low_hz <= 0.0 || self.band_high_hz <= self.band_low_hz {
            return Err(AnalysisError::InvalidConfig(format!(
                "Band edges must satisfy 0 < low < high, got [{}, {}]",
                self.band_low_hz, self.band_high_hz
            )));
        }
        if self.sampling_rate_hz <= 2.0 * self.band_high_hz {
            return Err(AnalysisError::InvalidConfig(format!(
                "Sampling rate {} Hz violates Nyquist for {} Hz band edge",
                self.sampling_rate_hz, self.band_high_hz
            )));
        }
        if self.lead_priority.is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "Lead priority table is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Integration window width in samples (at least 1).
    pub fn integration_window_samples(&self) -> usize {
        ((self.integration_window_ms / 1000.0 * self.sampling_rate_hz) as usize).max(1)
    }

    /// Minimum peak separation in samples.
    pub fn min_peak_separation_samples(&self) -> usize {
        (self.min_peak_separation_ms / 1000.0 * self.sampling_rate_hz) as usize
    }
}
