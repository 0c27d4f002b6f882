//! Error handling tests across ingestion, configuration, and the pipeline

use movement_phase_detection::config::Config;
use movement_phase_detection::error::Error;
use movement_phase_detection::ingest::{load_trajectories, parse_wide_csv};
use movement_phase_detection::landmark::Landmark;
use movement_phase_detection::trajectory::Trajectory;
use movement_phase_detection::velocity::compute_velocity;
use std::io::Write;

#[test]
fn test_insufficient_samples_message_names_the_count() {
    let trajectory = Trajectory::new(vec![1.0], vec![1.0], vec![1.0]).unwrap();
    let err = compute_velocity(&trajectory, Some(30.0)).unwrap_err();
    assert_eq!(err.to_string(), "trajectory has 1 sample(s); at least 2 are required");
}

#[test]
fn test_mismatched_axes_message_names_all_lengths() {
    let err = Trajectory::new(vec![0.0; 3], vec![0.0; 2], vec![0.0; 3]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "trajectory axes have mismatched lengths: x=3, y=2, z=3"
    );
}

#[test]
fn test_invalid_cell_carries_row_and_column_context() {
    let csv = "\
t_sec,x_world_LEFT_ANKLE,y_world_LEFT_ANKLE,z_world_LEFT_ANKLE
0.0,0.1,0.2,0.3
0.033,0.1,,0.3
";
    let err = parse_wide_csv(csv.as_bytes(), &[Landmark::LeftAnkle]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "row 1, column 'y_world_LEFT_ANKLE': cannot parse '' as a number"
    );
}

#[test]
fn test_missing_input_file_is_an_io_error() {
    let result = load_trajectories("/nonexistent/pose.wide.csv", &[Landmark::LeftWrist]);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_malformed_config_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "segmentation: [not, a, mapping]").unwrap();

    match Config::from_file(&path) {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_config_round_trips_through_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = Config::default();
    config.sampling.fps_override = Some(24.0);
    config.segmentation.min_duration = 5;
    config.landmarks.tracked = vec![Landmark::LeftKnee, Landmark::RightKnee];
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_unknown_landmark_in_config_is_rejected_at_load() {
    let yaml = "\
landmarks:
  tracked:
    - left_wrist
    - left_pinky
";
    let result: Result<Config, _> = serde_yaml::from_str(yaml);
    assert!(result.is_err());
}

#[test]
fn test_ragged_row_is_an_error() {
    // the csv reader enforces a consistent field count per record
    let csv = "\
t_sec,x_world_LEFT_WRIST,y_world_LEFT_WRIST,z_world_LEFT_WRIST
0.0,0.1,0.2,0.3
0.033,0.1
";
    let result = parse_wide_csv(csv.as_bytes(), &[Landmark::LeftWrist]);
    assert!(matches!(result, Err(Error::Csv(_))));
}
