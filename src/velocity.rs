//! Velocity estimation from position trajectories.
//!
//! Velocities are forward first differences of position scaled by the
//! sampling rate; no smoothing is applied before differencing. Scalar speed
//! is the Euclidean norm of the three per-axis components at each index.

use crate::constants::{
    DEFAULT_FPS, FAST_SPEED_THRESHOLD, IMPLAUSIBLE_SPEED_THRESHOLD, SPEED_REPORT_PERCENTILE,
};
use crate::landmark::Landmark;
use crate::trajectory::Trajectory;
use crate::{Error, Result};
use log::{info, warn};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-axis velocities and scalar 3D speed derived from one trajectory.
///
/// All sequences have length N−1 for N position samples; index i describes
/// the transition between position samples i and i+1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityProfile {
    vx: Vec<f64>,
    vy: Vec<f64>,
    vz: Vec<f64>,
    speed: Vec<f64>,
}

impl VelocityProfile {
    /// Number of frame transitions covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.speed.len()
    }

    /// Whether the profile covers no transitions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.speed.is_empty()
    }

    /// X-axis velocity sequence, m/s
    #[must_use]
    pub fn vx(&self) -> &[f64] {
        &self.vx
    }

    /// Y-axis velocity sequence, m/s
    #[must_use]
    pub fn vy(&self) -> &[f64] {
        &self.vy
    }

    /// Z-axis velocity sequence, m/s
    #[must_use]
    pub fn vz(&self) -> &[f64] {
        &self.vz
    }

    /// Scalar 3D speed sequence, m/s; every value is non-negative
    #[must_use]
    pub fn speed(&self) -> &[f64] {
        &self.speed
    }
}

/// Compute per-axis velocities and scalar speed for one trajectory.
///
/// `sampling_rate` scales position differences into m/s; `None` uses the
/// default rate (callers normally resolve the batch rate first and pass it
/// explicitly). Fails with [`Error::InsufficientSamples`] when the trajectory
/// holds fewer than two samples. Pure transform, no side effects.
pub fn compute_velocity(trajectory: &Trajectory, sampling_rate: Option<f64>) -> Result<VelocityProfile> {
    let n = trajectory.len();
    if n < 2 {
        return Err(Error::InsufficientSamples(n));
    }
    let fps = sampling_rate.unwrap_or(DEFAULT_FPS);

    let diff = |positions: &[f64]| -> Vec<f64> {
        positions.windows(2).map(|p| (p[1] - p[0]) * fps).collect()
    };
    let vx = diff(trajectory.x());
    let vy = diff(trajectory.y());
    let vz = diff(trajectory.z());

    let speed = vx
        .iter()
        .zip(&vy)
        .zip(&vz)
        .map(|((&x, &y), &z)| Vector3::new(x, y, z).norm())
        .collect();

    Ok(VelocityProfile { vx, vy, vz, speed })
}

/// Bands for the advisory speed plausibility check, m/s
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedBands {
    /// Above this, a landmark is fast but possible
    pub fast: f64,
    /// Above this, a landmark's speed is implausible for human movement
    pub implausible: f64,
}

impl Default for SpeedBands {
    fn default() -> Self {
        Self {
            fast: FAST_SPEED_THRESHOLD,
            implausible: IMPLAUSIBLE_SPEED_THRESHOLD,
        }
    }
}

/// Plausibility classification of one landmark's speed signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedAssessment {
    /// Within the expected range for human movement
    Reasonable,
    /// Fast but possible
    Fast,
    /// Too fast to be a real human movement; likely a tracking glitch
    Implausible,
}

/// Advisory speed summary for one landmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedValidation {
    /// Landmark the summary describes
    pub landmark: Landmark,
    /// Maximum observed speed, m/s
    pub max_speed: f64,
    /// Mean speed, m/s
    pub mean_speed: f64,
    /// 95th percentile speed, m/s
    pub p95_speed: f64,
    /// Plausibility band the maximum falls into
    pub assessment: SpeedAssessment,
}

/// Assess speed plausibility for every landmark.
///
/// Advisory only: the velocity profiles are never altered or suppressed, and
/// the pass always covers the full set of landmarks. Findings are logged and
/// returned as data for the caller to attach to its result.
#[must_use]
pub fn validate_speeds(
    profiles: &BTreeMap<Landmark, VelocityProfile>,
    bands: &SpeedBands,
) -> Vec<SpeedValidation> {
    let mut report = Vec::with_capacity(profiles.len());

    for (&landmark, profile) in profiles {
        let speeds = profile.speed();
        if speeds.is_empty() {
            continue;
        }
        let max_speed = speeds.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean_speed = speeds.iter().sum::<f64>() / speeds.len() as f64;
        let p95_speed = percentile(speeds, SPEED_REPORT_PERCENTILE);

        let assessment = if max_speed > bands.implausible {
            warn!("{landmark}: max speed {max_speed:.3} m/s is implausibly high");
            SpeedAssessment::Implausible
        } else if max_speed > bands.fast {
            warn!("{landmark}: max speed {max_speed:.3} m/s is high; check if realistic");
            SpeedAssessment::Fast
        } else {
            info!("{landmark}: max {max_speed:.3} m/s, mean {mean_speed:.3} m/s, p95 {p95_speed:.3} m/s");
            SpeedAssessment::Reasonable
        };

        report.push(SpeedValidation {
            landmark,
            max_speed,
            mean_speed,
            p95_speed,
            assessment,
        });
    }

    report
}

/// Percentile with linear interpolation between closest ranks
#[must_use]
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
