//! Speed-signal normalization into per-landmark z-scores.

use crate::constants::{ZSCORE_DIAGNOSTIC_CUTOFF, ZSCORE_EXTREME_CUTOFF};
use crate::landmark::Landmark;
use log::debug;
use serde::{Deserialize, Serialize};

/// Normalize a speed sequence into population z-scores.
///
/// Mean and standard deviation are taken over the entire sequence, not a
/// rolling window. A zero-variance signal (a landmark that never moves)
/// yields an all-zero profile. Total and deterministic; empty input yields
/// empty output.
#[must_use]
pub fn compute_zscore(speeds: &[f64]) -> Vec<f64> {
    if speeds.is_empty() {
        return Vec::new();
    }
    let mean = mean(speeds);
    let std = population_std(speeds, mean);
    if std == 0.0 {
        return vec![0.0; speeds.len()];
    }
    speeds.iter().map(|&s| (s - mean) / std).collect()
}

/// Arithmetic mean of a non-empty sequence
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation given the precomputed mean
pub(crate) fn population_std(values: &[f64], mean: f64) -> f64 {
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Debug-level summary of one landmark's speed and z-score signals.
///
/// The fixed 2.0 and 5.0 cutoffs counted here are diagnostic only;
/// segmentation uses the adaptive per-landmark threshold instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZScoreDiagnostics {
    /// Minimum speed, m/s
    pub speed_min: f64,
    /// Maximum speed, m/s
    pub speed_max: f64,
    /// Mean speed, m/s
    pub speed_mean: f64,
    /// Population standard deviation of speed, m/s
    pub speed_std: f64,
    /// Minimum z-score
    pub z_min: f64,
    /// Maximum z-score
    pub z_max: f64,
    /// Count of z-scores above the 2.0 cutoff
    pub above_two: usize,
    /// Count of z-scores above the 5.0 cutoff
    pub above_five: usize,
}

impl ZScoreDiagnostics {
    /// Summarize a speed signal and its derived z-scores
    #[must_use]
    pub fn compute(speeds: &[f64], z_scores: &[f64]) -> Self {
        let min_of = |v: &[f64]| v.iter().copied().fold(f64::INFINITY, f64::min);
        let max_of = |v: &[f64]| v.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let speed_mean = if speeds.is_empty() { 0.0 } else { mean(speeds) };
        Self {
            speed_min: min_of(speeds),
            speed_max: max_of(speeds),
            speed_mean,
            speed_std: population_std_or_zero(speeds, speed_mean),
            z_min: min_of(z_scores),
            z_max: max_of(z_scores),
            above_two: z_scores.iter().filter(|&&z| z > ZSCORE_DIAGNOSTIC_CUTOFF).count(),
            above_five: z_scores.iter().filter(|&&z| z > ZSCORE_EXTREME_CUTOFF).count(),
        }
    }

    /// Emit the summary at debug level for one landmark
    pub fn log(&self, landmark: Landmark) {
        debug!(
            "{landmark}: speed {:.6}..{:.6} m/s (mean {:.6}, std {:.6}), z {:.3}..{:.3}, >2: {}, >5: {}",
            self.speed_min,
            self.speed_max,
            self.speed_mean,
            self.speed_std,
            self.z_min,
            self.z_max,
            self.above_two,
            self.above_five
        );
    }
}

fn population_std_or_zero(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        population_std(values, mean)
    }
}
