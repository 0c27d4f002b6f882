//! The closed set of tracked body landmarks.
//!
//! Landmarks are a fixed enumeration rather than free-form strings so that a
//! typo in a configuration file fails at load time instead of silently
//! matching no input columns.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tracked anatomical point with a 3D world position per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    /// Left shoulder joint
    LeftShoulder,
    /// Right shoulder joint
    RightShoulder,
    /// Left elbow joint
    LeftElbow,
    /// Right elbow joint
    RightElbow,
    /// Left wrist joint
    LeftWrist,
    /// Right wrist joint
    RightWrist,
    /// Left hip joint
    LeftHip,
    /// Right hip joint
    RightHip,
    /// Left knee joint
    LeftKnee,
    /// Right knee joint
    RightKnee,
    /// Left ankle joint
    LeftAnkle,
    /// Right ankle joint
    RightAnkle,
}

impl Landmark {
    /// Every supported landmark
    pub const ALL: [Landmark; 12] = [
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
    ];

    /// Lower-case name used in configuration and reports
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Landmark::LeftShoulder => "left_shoulder",
            Landmark::RightShoulder => "right_shoulder",
            Landmark::LeftElbow => "left_elbow",
            Landmark::RightElbow => "right_elbow",
            Landmark::LeftWrist => "left_wrist",
            Landmark::RightWrist => "right_wrist",
            Landmark::LeftHip => "left_hip",
            Landmark::RightHip => "right_hip",
            Landmark::LeftKnee => "left_knee",
            Landmark::RightKnee => "right_knee",
            Landmark::LeftAnkle => "left_ankle",
            Landmark::RightAnkle => "right_ankle",
        }
    }

    /// Upper-case token used in the pose-extraction column convention,
    /// e.g. `RIGHT_WRIST` in `x_world_RIGHT_WRIST`
    #[must_use]
    pub fn column_token(&self) -> &'static str {
        match self {
            Landmark::LeftShoulder => "LEFT_SHOULDER",
            Landmark::RightShoulder => "RIGHT_SHOULDER",
            Landmark::LeftElbow => "LEFT_ELBOW",
            Landmark::RightElbow => "RIGHT_ELBOW",
            Landmark::LeftWrist => "LEFT_WRIST",
            Landmark::RightWrist => "RIGHT_WRIST",
            Landmark::LeftHip => "LEFT_HIP",
            Landmark::RightHip => "RIGHT_HIP",
            Landmark::LeftKnee => "LEFT_KNEE",
            Landmark::RightKnee => "RIGHT_KNEE",
            Landmark::LeftAnkle => "LEFT_ANKLE",
            Landmark::RightAnkle => "RIGHT_ANKLE",
        }
    }

    /// Column name for one axis of this landmark's world position
    #[must_use]
    pub fn position_column(&self, axis: char) -> String {
        format!("{}_world_{}", axis, self.column_token())
    }
}

impl FromStr for Landmark {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        Landmark::ALL
            .iter()
            .find(|l| l.name() == lower)
            .copied()
            .ok_or_else(|| Error::InvalidInput(format!("unknown landmark: {s}")))
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for landmark in Landmark::ALL {
            let parsed: Landmark = landmark.name().parse().unwrap();
            assert_eq!(parsed, landmark);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("LEFT_WRIST".parse::<Landmark>().unwrap(), Landmark::LeftWrist);
        assert_eq!("Right_Ankle".parse::<Landmark>().unwrap(), Landmark::RightAnkle);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("left_pinky".parse::<Landmark>().is_err());
        assert!("".parse::<Landmark>().is_err());
    }

    #[test]
    fn test_position_column_convention() {
        assert_eq!(Landmark::RightWrist.position_column('x'), "x_world_RIGHT_WRIST");
        assert_eq!(Landmark::LeftAnkle.position_column('z'), "z_world_LEFT_ANKLE");
    }

    #[test]
    fn test_serde_uses_snake_case_names() {
        let json = serde_json::to_string(&Landmark::LeftKnee).unwrap();
        assert_eq!(json, "\"left_knee\"");
        let back: Landmark = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Landmark::LeftKnee);
    }
}
