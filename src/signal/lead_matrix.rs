//! Multi-lead sample buffer
//!
//! A 12-lead ECG record arrives from the service layer as a samples × leads
//! matrix (canonically 4096 × 12 at 400 Hz), row-major: one row per sample
//! instant, one column per lead. The buffer is immutable for the duration of
//! an analysis call.

use crate::error::AnalysisError;

/// Immutable samples × leads buffer.
///
/// Storage is row-major (sample-major), matching the wire layout the service
/// layer validates and hands in. The detection core only reads single leads
/// out of it.
#[derive(Debug, Clone)]
pub struct LeadMatrix {
    data: Vec<f32>,
    samples: usize,
    leads: usize,
}

impl LeadMatrix {
    /// Build from flat row-major data (`samples * leads` values, sample-major).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInput`] if the buffer length does not
    /// match `samples * leads` or either dimension is zero.
    pub fn from_flat(data: Vec<f32>, samples: usize, leads: usize) -> Result<Self, AnalysisError> {
        if samples == 0 || leads == 0 {
            return Err(AnalysisError::InvalidInput(format!(
                "Degenerate matrix shape {}x{}",
                samples, leads
            )));
        }
        if data.len() != samples * leads {
            return Err(AnalysisError::InvalidInput(format!(
                "Buffer length {} does not match shape {}x{}",
                data.len(),
                samples,
                leads
            )));
        }
        Ok(Self {
            data,
            samples,
            leads,
        })
    }

    /// Build from per-lead columns (each of equal length).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInput`] if no columns are given, any
    /// column is empty, or the columns have unequal lengths.
    pub fn from_columns(columns: &[Vec<f32>]) -> Result<Self, AnalysisError> {
        if columns.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "No lead columns given".to_string(),
            ));
        }
        let samples = columns[0].len();
        if samples == 0 {
            return Err(AnalysisError::InvalidInput("Empty lead column".to_string()));
        }
        if columns.iter().any(|c| c.len() != samples) {
            return Err(AnalysisError::InvalidInput(
                "Lead columns have unequal lengths".to_string(),
            ));
        }
        let leads = columns.len();
        let mut data = Vec::with_capacity(samples * leads);
        for s in 0..samples {
            for column in columns {
                data.push(column[s]);
            }
        }
        Ok(Self {
            data,
            samples,
            leads,
        })
    }

    /// Number of sample instants per lead.
    pub fn num_samples(&self) -> usize {
        self.samples
    }

    /// Number of leads (columns).
    pub fn num_leads(&self) -> usize {
        self.leads
    }

    /// Extract one lead's waveform as a contiguous buffer.
    ///
    /// Returns `None` if the lead index is out of range; the fallback
    /// orchestrator treats that as "skip this priority rank".
    pub fn lead(&self, index: usize) -> Option<Vec<f32>> {
        if index >= self.leads {
            return None;
        }
        Some(
            (0..self.samples)
                .map(|s| self.data[s * self.leads + index])
                .collect(),
        )
    }
}
