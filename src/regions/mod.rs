//! Anatomical heart region mapping
//!
//! Maps condition probabilities from the (external) classifier onto the 10
//! anatomical regions of the cardiac conduction system, producing severity
//! scores, display colors, and electrical activation timing for the
//! visualization layer. Static tables and a color gradient; no signal
//! processing happens here.

use serde::{Deserialize, Serialize};

/// The 10 anatomical regions of the conduction system, in activation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeartRegion {
    /// Sinoatrial node (pacemaker)
    SaNode,
    /// Right atrium
    RightAtrium,
    /// Left atrium
    LeftAtrium,
    /// Atrioventricular node
    AvNode,
    /// Bundle of His
    BundleOfHis,
    /// Right bundle branch
    RightBundleBranch,
    /// Left bundle branch
    LeftBundleBranch,
    /// Purkinje fibers
    PurkinjeFibers,
    /// Right ventricle
    RightVentricle,
    /// Left ventricle
    LeftVentricle,
}

impl HeartRegion {
    /// All regions, in canonical (normal activation) order.
    pub const ALL: [HeartRegion; 10] = [
        HeartRegion::SaNode,
        HeartRegion::RightAtrium,
        HeartRegion::LeftAtrium,
        HeartRegion::AvNode,
        HeartRegion::BundleOfHis,
        HeartRegion::RightBundleBranch,
        HeartRegion::LeftBundleBranch,
        HeartRegion::PurkinjeFibers,
        HeartRegion::RightVentricle,
        HeartRegion::LeftVentricle,
    ];

    /// Normal electrical activation delay from SA-node firing, in ms.
    pub fn normal_activation_delay_ms(&self) -> f32 {
        match self {
            HeartRegion::SaNode => 0.0,
            HeartRegion::RightAtrium => 25.0,
            HeartRegion::LeftAtrium => 30.0,
            HeartRegion::AvNode => 50.0,
            HeartRegion::BundleOfHis => 150.0,
            HeartRegion::RightBundleBranch => 160.0,
            HeartRegion::LeftBundleBranch => 160.0,
            HeartRegion::PurkinjeFibers => 180.0,
            HeartRegion::RightVentricle => 200.0,
            HeartRegion::LeftVentricle => 200.0,
        }
    }
}

/// Conduction abnormalities the classifier reports probabilities for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// First-degree atrioventricular block
    FirstDegreeAvBlock,
    /// Right bundle branch block
    Rbbb,
    /// Left bundle branch block
    Lbbb,
    /// Sinus bradycardia
    SinusBradycardia,
    /// Sinus tachycardia
    SinusTachycardia,
    /// Atrial fibrillation
    AtrialFibrillation,
}

impl Condition {
    /// Severity multipliers: how strongly this condition affects a region.
    /// Regions not listed are unaffected.
    fn region_multiplier(&self, region: HeartRegion) -> Option<f32> {
        use Condition::*;
        use HeartRegion::*;
        match (self, region) {
            (Rbbb, RightBundleBranch) => Some(1.0),
            (Rbbb, RightVentricle) => Some(0.7),
            (Rbbb, PurkinjeFibers) => Some(0.4),

            (Lbbb, LeftBundleBranch) => Some(1.0),
            (Lbbb, LeftVentricle) => Some(0.7),
            (Lbbb, PurkinjeFibers) => Some(0.4),

            (SinusBradycardia, SaNode) => Some(1.0),
            (SinusBradycardia, RightAtrium) => Some(0.2),
            (SinusBradycardia, LeftAtrium) => Some(0.2),

            (SinusTachycardia, SaNode) => Some(1.0),
            (SinusTachycardia, RightAtrium) => Some(0.2),
            (SinusTachycardia, LeftAtrium) => Some(0.2),

            (AtrialFibrillation, RightAtrium) => Some(1.0),
            (AtrialFibrillation, LeftAtrium) => Some(1.0),
            (AtrialFibrillation, AvNode) => Some(0.75),

            (FirstDegreeAvBlock, AvNode) => Some(1.0),
            (FirstDegreeAvBlock, BundleOfHis) => Some(0.5),

            _ => None,
        }
    }

    /// Abnormal activation delay this condition imposes on a region when it
    /// is likely present. Regions not listed keep their normal timing.
    fn abnormal_delay_ms(&self, region: HeartRegion) -> Option<f32> {
        use Condition::*;
        use HeartRegion::*;
        match (self, region) {
            (Rbbb, RightBundleBranch) => Some(320.0),
            (Rbbb, RightVentricle) => Some(360.0),
            (Rbbb, PurkinjeFibers) => Some(234.0),

            (Lbbb, LeftBundleBranch) => Some(320.0),
            (Lbbb, LeftVentricle) => Some(360.0),
            (Lbbb, PurkinjeFibers) => Some(234.0),

            // Chaotic atrial activation: no ordered timing
            (AtrialFibrillation, RightAtrium) => Some(0.0),
            (AtrialFibrillation, LeftAtrium) => Some(0.0),
            (AtrialFibrillation, AvNode) => Some(65.0),

            _ => None,
        }
    }
}

/// A condition is listed as "affecting" a region above this probability.
const AFFECTING_PROBABILITY: f32 = 0.05;

/// Abnormal timing applies when the condition's probability exceeds this.
const LIKELY_PROBABILITY: f32 = 0.5;

/// Health state of one region, ready for visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionHealth {
    /// Which region this describes
    pub region: HeartRegion,
    /// Severity 0.0 (healthy) to 1.0 (critical), 3 decimals
    pub severity: f32,
    /// RGB color on the green→yellow→orange→red gradient, 0.0–1.0 each
    pub color: [f32; 3],
    /// Activation delay in ms, abnormal timing applied where likely
    pub activation_delay_ms: f32,
    /// Conditions contributing non-trivially to this region's severity
    pub affected_by: Vec<Condition>,
}

/// Convert severity to an RGB color on the gradient
/// green (healthy) → yellow → orange → red (critical).
///
/// Components are rounded to 3 decimals for stable external reporting.
pub fn severity_to_color(severity: f32) -> [f32; 3] {
    let severity = severity.clamp(0.0, 1.0);

    let (r, g, b) = if severity < 0.25 {
        // Green -> yellow
        let t = severity / 0.25;
        (t, 1.0, 0.0)
    } else if severity < 0.50 {
        // Yellow -> orange
        let t = (severity - 0.25) / 0.25;
        (1.0, 1.0 - t * 0.35, 0.0)
    } else if severity < 0.75 {
        // Orange -> red
        let t = (severity - 0.50) / 0.25;
        (1.0, 0.65 - t * 0.65, 0.0)
    } else {
        // Deep red
        (1.0, 0.0, 0.0)
    };

    [round3(r), round3(g), round3(b)]
}

/// Severity of one region under a set of condition probabilities.
///
/// Contributions combine by max, not sum: the worst single condition
/// determines how compromised the region looks.
pub fn region_severity(
    region: HeartRegion,
    predictions: &[(Condition, f32)],
) -> (f32, Vec<Condition>) {
    let mut severity = 0.0f32;
    let mut affecting = Vec::new();

    for &(condition, probability) in predictions {
        if let Some(multiplier) = condition.region_multiplier(region) {
            severity = severity.max(probability * multiplier);
            if probability > AFFECTING_PROBABILITY {
                affecting.push(condition);
            }
        }
    }

    (round3(severity), affecting)
}

/// Activation delay for a region, with abnormal timing applied for any
/// condition whose probability exceeds the likelihood bar.
pub fn activation_delay_ms(region: HeartRegion, predictions: &[(Condition, f32)]) -> f32 {
    let mut delay = region.normal_activation_delay_ms();
    for &(condition, probability) in predictions {
        if probability > LIKELY_PROBABILITY {
            if let Some(abnormal) = condition.abnormal_delay_ms(region) {
                delay = abnormal;
            }
        }
    }
    delay
}

/// Complete health status for all 10 regions, in canonical order.
pub fn region_health(predictions: &[(Condition, f32)]) -> Vec<RegionHealth> {
    HeartRegion::ALL
        .iter()
        .map(|&region| {
            let (severity, affected_by) = region_severity(region, predictions);
            RegionHealth {
                region,
                severity,
                color: severity_to_color(severity),
                activation_delay_ms: activation_delay_ms(region, predictions),
                affected_by,
            }
        })
        .collect()
}

/// Activation sequence sorted by delay; canonical region order breaks ties.
pub fn activation_sequence(health: &[RegionHealth]) -> Vec<(HeartRegion, f32)> {
    let mut sequence: Vec<(HeartRegion, f32)> = health
        .iter()
        .map(|h| (h.region, h.activation_delay_ms))
        .collect();
    sequence.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    sequence
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
