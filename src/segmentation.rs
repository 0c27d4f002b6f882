//! Threshold-crossing segmentation of z-score signals into movement intervals.

use crate::constants::DEFAULT_THRESHOLD_FRACTION;
use serde::{Deserialize, Serialize};

/// A half-open index range `[start, end)` over a landmark's speed signal
/// during which its z-score stayed above the adaptive threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementInterval {
    /// First index above threshold
    pub start: usize,
    /// One past the last index above threshold
    pub end: usize,
}

impl MovementInterval {
    /// Interval length in index units
    #[must_use]
    pub fn duration(&self) -> usize {
        self.end - self.start
    }
}

/// Detect movement intervals with the default threshold fraction (0.5).
///
/// See [`detect_intervals_with_fraction`] for the full contract.
#[must_use]
pub fn detect_intervals(z_scores: &[f64], min_duration: usize) -> Vec<MovementInterval> {
    detect_intervals_with_fraction(z_scores, min_duration, DEFAULT_THRESHOLD_FRACTION)
}

/// Detect threshold-crossing intervals in a z-score signal.
///
/// The threshold adapts per call: `fraction × max(z)`. A sample exactly at
/// the threshold counts as not above, so it closes an interval and never
/// opens one. Excursions shorter than `min_duration` are discarded. An
/// excursion still above threshold at the final sample never closes and is
/// dropped rather than emitted as a trailing interval.
///
/// When the maximum z-score is not positive the threshold would be
/// meaningless (a never-moving or empty signal), so no interval is produced.
/// Never fails; intervals come out non-overlapping in increasing start order.
#[must_use]
pub fn detect_intervals_with_fraction(
    z_scores: &[f64],
    min_duration: usize,
    fraction: f64,
) -> Vec<MovementInterval> {
    let max_z = z_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max_z <= 0.0 || max_z.is_nan() {
        return Vec::new();
    }
    let threshold = fraction * max_z;

    let mut intervals = Vec::new();
    let mut open_start: Option<usize> = None;

    for i in 1..z_scores.len() {
        let prev = z_scores[i - 1];
        let curr = z_scores[i];

        if prev <= threshold && curr > threshold {
            open_start = Some(i);
        }

        if prev > threshold && curr <= threshold {
            if let Some(start) = open_start.take() {
                let duration = i - start;
                if duration >= min_duration {
                    intervals.push(MovementInterval { start, end: i });
                }
            }
        }
    }

    intervals
}
