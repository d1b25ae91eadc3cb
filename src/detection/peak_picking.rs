//! Robust peak detection utilities
//!
//! Finds local maxima in 1-D signals subject to a minimum horizontal
//! distance and a minimum prominence. Used on the integrated QRS energy
//! envelope, where prominence rejects noise bumps riding on the baseline.

/// Find peaks in a signal.
///
/// # Arguments
///
/// * `signal` - Signal to find peaks in
/// * `min_distance` - Minimum distance between surviving peaks (in samples);
///   when two peaks are closer, the smaller one is dropped
/// * `min_prominence` - Minimum prominence: how far the signal must drop on
///   both sides of a peak before reaching a higher value
///
/// # Returns
///
/// Ascending sample indices of the surviving peaks.
///
/// # Algorithm
///
/// 1. Find all local maxima (plateaus resolve to their midpoint)
/// 2. Enforce minimum distance, keeping higher peaks when too close
/// 3. Filter by prominence
///
/// Edge samples are never peaks; there is nothing to compare them against
/// on one side.
pub fn find_peaks(signal: &[f32], min_distance: usize, min_prominence: f32) -> Vec<usize> {
    if signal.len() < 3 {
        return vec![];
    }

    let mut peaks = local_maxima(signal);

    if min_distance > 1 && peaks.len() > 1 {
        peaks = select_by_distance(signal, peaks, min_distance);
    }

    peaks.retain(|&p| prominence(signal, p) >= min_prominence);
    peaks
}

/// All interior local maxima, ascending. A run of equal values bounded by
/// lower values on both sides counts as one peak at the run's midpoint.
fn local_maxima(signal: &[f32]) -> Vec<usize> {
    let mut peaks = Vec::new();
    let n = signal.len();
    let mut i = 1;
    while i < n - 1 {
        if signal[i - 1] < signal[i] {
            // Scan ahead over a possible plateau
            let mut ahead = i + 1;
            while ahead < n - 1 && signal[ahead] == signal[i] {
                ahead += 1;
            }
            if signal[ahead] < signal[i] {
                peaks.push((i + ahead - 1) / 2);
                i = ahead;
                continue;
            }
        }
        i += 1;
    }
    peaks
}

/// Enforce a minimum distance between peaks, dropping smaller peaks first.
fn select_by_distance(signal: &[f32], peaks: Vec<usize>, min_distance: usize) -> Vec<usize> {
    // Process by height (highest first) so the best peak in a cluster wins
    let mut by_height = peaks.clone();
    by_height.sort_by(|&a, &b| {
        signal[b]
            .partial_cmp(&signal[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut kept: Vec<usize> = Vec::with_capacity(by_height.len());
    for idx in by_height {
        let too_close = kept
            .iter()
            .any(|&k| (idx as i64 - k as i64).unsigned_abs() < min_distance as u64);
        if !too_close {
            kept.push(idx);
        }
    }

    kept.sort_unstable();
    kept
}

/// Prominence of the peak at `peak`: height above the higher of the two
/// base minima, where each base is the lowest point between the peak and
/// the nearest strictly higher sample (or the signal edge) on that side.
fn prominence(signal: &[f32], peak: usize) -> f32 {
    let height = signal[peak];

    let mut left_min = height;
    let mut i = peak;
    while i > 0 {
        i -= 1;
        if signal[i] > height {
            break;
        }
        if signal[i] < left_min {
            left_min = signal[i];
        }
    }

    let mut right_min = height;
    let mut i = peak;
    while i + 1 < signal.len() {
        i += 1;
        if signal[i] > height {
            break;
        }
        if signal[i] < right_min {
            right_min = signal[i];
        }
    }

    height - left_min.max(right_min)
}
