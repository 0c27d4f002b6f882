//! Orchestration of the per-landmark detection pipeline.
//!
//! For each landmark independently: velocity estimation, z-score
//! normalization, then interval segmentation. Thresholds and z-scores are
//! landmark-local; landmarks never interact. A failure for one landmark
//! degrades that landmark's entry to an empty result with a recorded reason
//! and never aborts the batch.

use crate::config::Config;
use crate::constants::{DEFAULT_MIN_INTERVAL_DURATION, DEFAULT_THRESHOLD_FRACTION};
use crate::landmark::Landmark;
use crate::segmentation::{detect_intervals_with_fraction, MovementInterval};
use crate::trajectory::{resolve_sampling_rate, RateResolution, TrajectoryStore};
use crate::velocity::{compute_velocity, validate_speeds, SpeedBands, SpeedValidation};
use crate::zscore::{compute_zscore, ZScoreDiagnostics};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of the pipeline for one landmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkResult {
    /// Detected movement intervals, in increasing start order
    pub intervals: Vec<MovementInterval>,
    /// Advisory speed plausibility summary, absent when velocity failed
    pub validation: Option<SpeedValidation>,
    /// Failure reason when the pipeline could not run for this landmark
    pub error: Option<String>,
}

/// Terminal output of one detection run: every landmark of the input store
/// appears, carrying either its intervals or an explicit failure reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseDetectionResult {
    /// How the shared sampling rate was obtained
    pub sampling_rate: RateResolution,
    /// Per-landmark outcomes, in stable landmark order
    pub landmarks: BTreeMap<Landmark, LandmarkResult>,
}

impl PhaseDetectionResult {
    /// Total number of intervals across all landmarks
    #[must_use]
    pub fn interval_count(&self) -> usize {
        self.landmarks.values().map(|r| r.intervals.len()).sum()
    }
}

/// Runs the three-stage pipeline across all landmarks of a trajectory store
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseDetector {
    sampling_rate: Option<f64>,
    min_duration: usize,
    threshold_fraction: f64,
    bands: SpeedBands,
}

impl Default for PhaseDetector {
    fn default() -> Self {
        Self {
            sampling_rate: None,
            min_duration: DEFAULT_MIN_INTERVAL_DURATION,
            threshold_fraction: DEFAULT_THRESHOLD_FRACTION,
            bands: SpeedBands::default(),
        }
    }
}

impl PhaseDetector {
    /// Create a detector with the default parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a detector from a validated configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            sampling_rate: config.sampling.fps_override,
            min_duration: config.segmentation.min_duration,
            threshold_fraction: config.segmentation.threshold_fraction,
            bands: config.speed_validation.bands(),
        }
    }

    /// Override the sampling rate instead of inferring it from timestamps
    #[must_use]
    pub fn with_sampling_rate(mut self, fps: f64) -> Self {
        self.sampling_rate = Some(fps);
        self
    }

    /// Set the minimum interval duration in index units
    #[must_use]
    pub fn with_min_duration(mut self, min_duration: usize) -> Self {
        self.min_duration = min_duration;
        self
    }

    /// Set the fraction of max z-score used as segmentation threshold
    #[must_use]
    pub fn with_threshold_fraction(mut self, fraction: f64) -> Self {
        self.threshold_fraction = fraction;
        self
    }

    /// Run velocity estimation, normalization and segmentation for every
    /// landmark in the store.
    ///
    /// The sampling rate is resolved once from the shared time axis and used
    /// for all landmarks. Deterministic: the same store yields the same
    /// result on every call.
    #[must_use]
    pub fn detect(&self, store: &TrajectoryStore) -> PhaseDetectionResult {
        let rate = resolve_sampling_rate(self.sampling_rate, store.time_axis());
        info!(
            "Detecting movement phases for {} landmark(s) at {:.2} fps",
            store.len(),
            rate.fps()
        );

        let mut profiles = BTreeMap::new();
        let mut failures: BTreeMap<Landmark, String> = BTreeMap::new();
        for (landmark, trajectory) in store.iter() {
            match compute_velocity(trajectory, Some(rate.fps())) {
                Ok(profile) => {
                    profiles.insert(landmark, profile);
                }
                Err(e) => {
                    warn!("{landmark}: skipping, {e}");
                    failures.insert(landmark, e.to_string());
                }
            }
        }

        // Advisory pass over every landmark; never alters the profiles.
        let validations = validate_speeds(&profiles, &self.bands);

        let mut landmarks = BTreeMap::new();
        for (landmark, profile) in &profiles {
            let z_scores = compute_zscore(profile.speed());
            ZScoreDiagnostics::compute(profile.speed(), &z_scores).log(*landmark);
            let intervals =
                detect_intervals_with_fraction(&z_scores, self.min_duration, self.threshold_fraction);
            let validation = validations.iter().find(|v| v.landmark == *landmark).cloned();
            landmarks.insert(
                *landmark,
                LandmarkResult {
                    intervals,
                    validation,
                    error: None,
                },
            );
        }
        for (landmark, reason) in failures {
            landmarks.insert(
                landmark,
                LandmarkResult {
                    intervals: Vec::new(),
                    validation: None,
                    error: Some(reason),
                },
            );
        }

        PhaseDetectionResult {
            sampling_rate: rate,
            landmarks,
        }
    }
}

/// Run phase detection with default parameters, optionally overriding the
/// sampling rate
#[must_use]
pub fn detect_phases(store: &TrajectoryStore, sampling_rate: Option<f64>) -> PhaseDetectionResult {
    let mut detector = PhaseDetector::new();
    detector.sampling_rate = sampling_rate;
    detector.detect(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::Trajectory;

    fn flat(values: Vec<f64>) -> Trajectory {
        let n = values.len();
        Trajectory::new(values, vec![0.0; n], vec![0.0; n]).unwrap()
    }

    /// Position whose speed signal is `low` per frame except for an elevated
    /// block of `len` frames at `high` starting at transition `start`
    fn stepped_positions(total: usize, start: usize, len: usize, low: f64, high: f64) -> Vec<f64> {
        let mut positions = vec![0.0];
        for i in 0..total {
            let step = if i >= start && i < start + len { high } else { low };
            let prev = *positions.last().unwrap();
            positions.push(prev + step);
        }
        positions
    }

    #[test]
    fn test_every_landmark_appears_in_result() {
        let mut store = TrajectoryStore::new();
        store.insert(Landmark::LeftWrist, flat(vec![0.0, 1.0, 2.0]));
        store.insert(Landmark::RightWrist, flat(vec![0.0]));
        let result = detect_phases(&store, Some(30.0));

        assert_eq!(result.landmarks.len(), 2);
        assert!(result.landmarks[&Landmark::LeftWrist].error.is_none());
        let failed = &result.landmarks[&Landmark::RightWrist];
        assert!(failed.intervals.is_empty());
        assert!(failed.error.as_deref().unwrap().contains("at least 2"));
    }

    #[test]
    fn test_elevated_block_detected_per_landmark() {
        let mut store = TrajectoryStore::new();
        store.insert(
            Landmark::RightWrist,
            flat(stepped_positions(60, 20, 10, 0.01, 0.1)),
        );
        store.insert(Landmark::LeftAnkle, flat(vec![1.0; 60]));
        let result = detect_phases(&store, Some(30.0));

        let moving = &result.landmarks[&Landmark::RightWrist];
        assert_eq!(moving.intervals, vec![MovementInterval { start: 20, end: 30 }]);
        // the still landmark has zero variance, max z 0, no intervals
        let still = &result.landmarks[&Landmark::LeftAnkle];
        assert!(still.intervals.is_empty());
        assert!(still.error.is_none());
    }

    #[test]
    fn test_detection_is_idempotent() {
        let mut store = TrajectoryStore::new();
        store.insert(
            Landmark::RightWrist,
            flat(stepped_positions(80, 30, 12, 0.02, 0.15)),
        );
        store.set_time_axis((0..81).map(|i| f64::from(i) / 25.0).collect());

        let detector = PhaseDetector::new();
        let first = detector.detect(&store);
        let second = detector.detect(&store);
        assert_eq!(first, second);
    }

    #[test]
    fn test_builder_parameters_apply() {
        let mut store = TrajectoryStore::new();
        store.insert(
            Landmark::LeftWrist,
            flat(stepped_positions(60, 20, 5, 0.01, 0.1)),
        );
        // 5-frame excursion passes with a lower duration floor
        let relaxed = PhaseDetector::new().with_sampling_rate(30.0).with_min_duration(3);
        let result = relaxed.detect(&store);
        assert_eq!(
            result.landmarks[&Landmark::LeftWrist].intervals,
            vec![MovementInterval { start: 20, end: 25 }]
        );

        let strict = PhaseDetector::new().with_sampling_rate(30.0).with_min_duration(7);
        assert!(strict.detect(&store).landmarks[&Landmark::LeftWrist]
            .intervals
            .is_empty());
    }
}
