//! Per-landmark position trajectories and sampling-rate resolution.

use crate::constants::DEFAULT_FPS;
use crate::landmark::Landmark;
use crate::{Error, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One landmark's world-space position history over frames.
///
/// The three coordinate sequences are in meters and share identical length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl Trajectory {
    /// Create a trajectory from three equal-length coordinate sequences
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(Error::MismatchedAxes {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }
        Ok(Self { x, y, z })
    }

    /// Number of position samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the trajectory holds no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// X coordinate sequence, meters
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Y coordinate sequence, meters
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Z coordinate sequence, meters
    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }
}

/// Immutable snapshot of all landmark trajectories for one recording.
///
/// Holds the shared elapsed-time axis alongside the per-landmark position
/// arrays. The store carries no sampling-rate state; rate resolution is an
/// explicit function of the time axis (`resolve_sampling_rate`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryStore {
    trajectories: BTreeMap<Landmark, Trajectory>,
    time: Vec<f64>,
}

impl TrajectoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the shared elapsed-time axis, seconds per frame
    pub fn set_time_axis(&mut self, time: Vec<f64>) {
        self.time = time;
    }

    /// The shared elapsed-time axis; empty when the input carried no timestamps
    #[must_use]
    pub fn time_axis(&self) -> &[f64] {
        &self.time
    }

    /// Add or replace one landmark's trajectory
    pub fn insert(&mut self, landmark: Landmark, trajectory: Trajectory) {
        self.trajectories.insert(landmark, trajectory);
    }

    /// Look up one landmark's trajectory
    #[must_use]
    pub fn get(&self, landmark: Landmark) -> Option<&Trajectory> {
        self.trajectories.get(&landmark)
    }

    /// Landmarks present in the store, in stable order
    pub fn landmarks(&self) -> impl Iterator<Item = Landmark> + '_ {
        self.trajectories.keys().copied()
    }

    /// Iterate over all trajectories in stable landmark order
    pub fn iter(&self) -> impl Iterator<Item = (Landmark, &Trajectory)> {
        self.trajectories.iter().map(|(l, t)| (*l, t))
    }

    /// Number of landmarks held
    #[must_use]
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    /// Whether the store holds no landmarks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }
}

/// How the sampling rate for a detection run was obtained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "fps", rename_all = "snake_case")]
pub enum RateResolution {
    /// Supplied explicitly by the caller or configuration
    Explicit(f64),
    /// Inferred from the mean positive timestamp delta of the shared time axis
    Inferred(f64),
    /// No explicit rate and no usable timestamps; the documented default
    Fallback(f64),
}

impl RateResolution {
    /// The resolved rate in frames per second
    #[must_use]
    pub fn fps(&self) -> f64 {
        match self {
            RateResolution::Explicit(fps) | RateResolution::Inferred(fps) | RateResolution::Fallback(fps) => *fps,
        }
    }
}

/// Resolve the sampling rate for one input batch.
///
/// An explicit rate wins. Otherwise the rate is inferred as the reciprocal of
/// the mean positive consecutive timestamp difference. When no positive delta
/// exists (no timestamps, a single frame, or a frozen clock) the default rate
/// is used and a warning is logged. Called once per batch; all landmarks
/// share the resolved rate.
#[must_use]
pub fn resolve_sampling_rate(explicit: Option<f64>, time: &[f64]) -> RateResolution {
    if let Some(fps) = explicit {
        info!("Using explicit sampling rate: {fps:.2} fps");
        return RateResolution::Explicit(fps);
    }

    let mut sum = 0.0;
    let mut count = 0usize;
    for pair in time.windows(2) {
        let dt = pair[1] - pair[0];
        if dt > 0.0 {
            sum += dt;
            count += 1;
        }
    }

    if count == 0 {
        warn!("No usable timestamps; falling back to default rate: {DEFAULT_FPS:.1} fps");
        return RateResolution::Fallback(DEFAULT_FPS);
    }

    let fps = count as f64 / sum;
    info!("Inferred sampling rate from timestamps: {fps:.2} fps");
    RateResolution::Inferred(fps)
}
