//! Constants used throughout the application

use crate::landmark::Landmark;

/// Default frames per second when no rate is supplied and none can be inferred
pub const DEFAULT_FPS: f64 = 30.0;

/// Minimum movement interval duration, in speed-sample index units
pub const DEFAULT_MIN_INTERVAL_DURATION: usize = 7;

/// Fraction of the per-landmark maximum z-score used as segmentation threshold
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.5;

/// Speed above which a landmark is flagged as fast but possible (m/s)
pub const FAST_SPEED_THRESHOLD: f64 = 5.0;

/// Speed above which a landmark is flagged as implausible for human movement (m/s)
pub const IMPLAUSIBLE_SPEED_THRESHOLD: f64 = 10.0;

/// Percentile reported in the speed validation summary
pub const SPEED_REPORT_PERCENTILE: f64 = 95.0;

/// Z-score cutoff counted in diagnostics (not used for segmentation)
pub const ZSCORE_DIAGNOSTIC_CUTOFF: f64 = 2.0;

/// Z-score cutoff for extreme excursions in diagnostics
pub const ZSCORE_EXTREME_CUTOFF: f64 = 5.0;

/// Name of the elapsed-time column in the wide input table
pub const TIME_COLUMN: &str = "t_sec";

/// Landmarks tracked by default for technique analysis
pub const KEY_LANDMARKS: [Landmark; 6] = [
    Landmark::RightShoulder,
    Landmark::RightWrist,
    Landmark::LeftShoulder,
    Landmark::LeftWrist,
    Landmark::RightAnkle,
    Landmark::LeftAnkle,
];
