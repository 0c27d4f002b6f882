//! Movement phase detection for tracked body landmarks.
//!
//! This library identifies, for a set of landmarks observed over time, the
//! windows during which each landmark moves significantly faster than its
//! own baseline. The pipeline per landmark is:
//! 1. Velocity estimation: forward first differences of 3D position scaled
//!    by the sampling rate, plus scalar speed as the Euclidean norm
//! 2. Normalization: population z-scores of the speed signal
//! 3. Segmentation: threshold-crossing intervals against an adaptive,
//!    per-landmark threshold with a minimum-duration floor
//!
//! Landmark positions come from an upstream pose-extraction service; this
//! crate consumes its wide tabular output and produces a per-landmark
//! mapping of movement intervals for downstream technique classification.
//!
//! # Examples
//!
//! ## Single-landmark pipeline
//!
//! ```
//! use movement_phase_detection::segmentation::detect_intervals;
//! use movement_phase_detection::trajectory::Trajectory;
//! use movement_phase_detection::velocity::compute_velocity;
//! use movement_phase_detection::zscore::compute_zscore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let x = vec![0.0, 1.0, 2.0, 3.0, 10.0, 17.0, 18.0, 19.0];
//! let n = x.len();
//! let trajectory = Trajectory::new(x, vec![0.0; n], vec![0.0; n])?;
//!
//! let profile = compute_velocity(&trajectory, Some(1.0))?;
//! assert_eq!(profile.len(), n - 1);
//!
//! let z_scores = compute_zscore(profile.speed());
//! let intervals = detect_intervals(&z_scores, 7);
//! // the two-frame spike is below the minimum duration
//! assert!(intervals.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Batch detection across landmarks
//!
//! ```
//! use movement_phase_detection::landmark::Landmark;
//! use movement_phase_detection::phase_detection::PhaseDetector;
//! use movement_phase_detection::trajectory::{Trajectory, TrajectoryStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = TrajectoryStore::new();
//! let positions: Vec<f64> = (0..100).map(|i| f64::from(i) * 0.01).collect();
//! store.insert(
//!     Landmark::RightWrist,
//!     Trajectory::new(positions.clone(), vec![0.0; 100], vec![0.0; 100])?,
//! );
//! store.set_time_axis((0..100).map(|i| f64::from(i) / 30.0).collect());
//!
//! let result = PhaseDetector::new().detect(&store);
//! // every landmark of the store appears, with intervals or a failure reason
//! assert!(result.landmarks.contains_key(&Landmark::RightWrist));
//! # Ok(())
//! # }
//! ```

/// The closed enumeration of tracked body landmarks
pub mod landmark;

/// Position trajectories and sampling-rate resolution
pub mod trajectory;

/// Wide pose CSV ingestion
pub mod ingest;

/// Velocity estimation and advisory speed validation
pub mod velocity;

/// Z-score normalization of speed signals
pub mod zscore;

/// Threshold-crossing interval segmentation
pub mod segmentation;

/// Per-landmark pipeline orchestration
pub mod phase_detection;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
