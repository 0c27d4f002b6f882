//! Configuration management for the movement phase detection application

use crate::constants::{
    DEFAULT_FPS, DEFAULT_MIN_INTERVAL_DURATION, DEFAULT_THRESHOLD_FRACTION, FAST_SPEED_THRESHOLD,
    IMPLAUSIBLE_SPEED_THRESHOLD, KEY_LANDMARKS,
};
use crate::landmark::Landmark;
use crate::velocity::SpeedBands;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sampling rate configuration
    pub sampling: SamplingConfig,

    /// Interval segmentation configuration
    pub segmentation: SegmentationConfig,

    /// Advisory speed validation bands
    pub speed_validation: SpeedValidationConfig,

    /// Landmarks to track
    pub landmarks: LandmarkConfig,
}

/// Sampling rate parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Explicit rate override; when absent the rate is inferred from the
    /// input's timestamps
    pub fps_override: Option<f64>,

    /// Rate assumed when no override is given and inference fails
    pub default_fps: f64,
}

/// Interval segmentation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Minimum interval duration in speed-sample index units
    pub min_duration: usize,

    /// Fraction of the per-landmark maximum z-score used as threshold (0.0-1.0)
    pub threshold_fraction: f64,
}

/// Advisory speed plausibility bands, m/s
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedValidationConfig {
    /// Above this, a landmark is flagged as fast but possible
    pub fast_threshold: f64,

    /// Above this, a landmark is flagged as implausible
    pub implausible_threshold: f64,
}

impl SpeedValidationConfig {
    /// The configured bands as the velocity module's value type
    #[must_use]
    pub fn bands(&self) -> SpeedBands {
        SpeedBands {
            fast: self.fast_threshold,
            implausible: self.implausible_threshold,
        }
    }
}

/// Tracked landmark set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkConfig {
    /// Landmarks to analyze; input columns for other landmarks are ignored
    pub tracked: Vec<Landmark>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig::default(),
            segmentation: SegmentationConfig::default(),
            speed_validation: SpeedValidationConfig::default(),
            landmarks: LandmarkConfig::default(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            fps_override: None,
            default_fps: DEFAULT_FPS,
        }
    }
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_duration: DEFAULT_MIN_INTERVAL_DURATION,
            threshold_fraction: DEFAULT_THRESHOLD_FRACTION,
        }
    }
}

impl Default for SpeedValidationConfig {
    fn default() -> Self {
        Self {
            fast_threshold: FAST_SPEED_THRESHOLD,
            implausible_threshold: IMPLAUSIBLE_SPEED_THRESHOLD,
        }
    }
}

impl Default for LandmarkConfig {
    fn default() -> Self {
        Self {
            tracked: KEY_LANDMARKS.to_vec(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(fps) = self.sampling.fps_override {
            if fps <= 0.0 || !fps.is_finite() {
                return Err(Error::ConfigError(
                    "Sampling rate override must be positive and finite".to_string(),
                ));
            }
        }
        if self.sampling.default_fps <= 0.0 || !self.sampling.default_fps.is_finite() {
            return Err(Error::ConfigError(
                "Default sampling rate must be positive and finite".to_string(),
            ));
        }

        if self.segmentation.min_duration == 0 {
            return Err(Error::ConfigError(
                "Minimum interval duration must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.segmentation.threshold_fraction)
            || self.segmentation.threshold_fraction == 0.0
        {
            return Err(Error::ConfigError(
                "Threshold fraction must be in (0.0, 1.0]".to_string(),
            ));
        }

        if self.speed_validation.fast_threshold <= 0.0 {
            return Err(Error::ConfigError(
                "Fast speed threshold must be greater than 0".to_string(),
            ));
        }
        if self.speed_validation.implausible_threshold <= self.speed_validation.fast_threshold {
            return Err(Error::ConfigError(
                "Implausible speed threshold must exceed the fast threshold".to_string(),
            ));
        }

        if self.landmarks.tracked.is_empty() {
            return Err(Error::ConfigError(
                "At least one landmark must be tracked".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Movement Phase Detection Configuration

# Sampling rate
sampling:
  # fps_override: 30.0
  default_fps: 30.0

# Interval segmentation
segmentation:
  min_duration: 7
  threshold_fraction: 0.5

# Advisory speed plausibility bands (m/s)
speed_validation:
  fast_threshold: 5.0
  implausible_threshold: 10.0

# Landmarks to analyze
landmarks:
  tracked:
    - right_shoulder
    - right_wrist
    - left_shoulder
    - left_wrist
    - right_ankle
    - left_ankle
"#;
