//! Signal input and filtering modules
//!
//! Plumbing between the service layer and the detection core:
//! - Multi-lead sample buffer (samples × leads)
//! - Zero-phase Butterworth band-pass filtering
//! - Basic descriptive statistics

pub mod bandpass;
pub mod lead_matrix;
pub mod stats;
