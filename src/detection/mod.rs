//! Heartbeat detection modules
//!
//! The algorithmic core of the crate:
//! - Peak picking with prominence and minimum-distance constraints
//! - Pan-Tompkins single-lead R-peak detection
//! - Signal quality scoring
//! - Multi-lead fallback orchestration

pub mod fallback;
pub mod pan_tompkins;
pub mod peak_picking;
pub mod quality;
