//! Ingestion of the wide pose table into a trajectory store.
//!
//! The input has one row per video frame, a `t_sec` elapsed-time column, and
//! per landmark the `<axis>_world_<LANDMARK>` position columns produced by
//! the pose-extraction service. A tracked landmark missing any of its three
//! coordinate columns is dropped before computation; that is a documented
//! filter, not an error. A cell that fails to parse as a number is a hard
//! ingest error carrying row and column context.

use crate::constants::TIME_COLUMN;
use crate::landmark::Landmark;
use crate::trajectory::{Trajectory, TrajectoryStore};
use crate::{Error, Result};
use log::{debug, info};
use std::io::Read;
use std::path::Path;

/// Read the wide pose CSV at `path` into a trajectory store for the tracked
/// landmarks
pub fn load_trajectories<P: AsRef<Path>>(path: P, tracked: &[Landmark]) -> Result<TrajectoryStore> {
    let file = std::fs::File::open(path.as_ref())?;
    let store = parse_wide_csv(file, tracked)?;
    info!(
        "Loaded {} landmark(s) over {} frame(s) from {}",
        store.len(),
        store.time_axis().len(),
        path.as_ref().display()
    );
    Ok(store)
}

/// Parse a wide pose table from any reader.
///
/// Columns for landmarks outside `tracked` are ignored. A missing `t_sec`
/// column leaves the time axis empty, in which case rate inference later
/// falls back to the default rate.
pub fn parse_wide_csv<R: Read>(reader: R, tracked: &[Landmark]) -> Result<TrajectoryStore> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column_index = |name: &str| headers.iter().position(|h| h == name);

    let time_index = column_index(TIME_COLUMN);
    if time_index.is_none() {
        debug!("No '{TIME_COLUMN}' column in input; time axis left empty");
    }

    // Resolve the (x, y, z) column indices per tracked landmark up front;
    // a landmark lacking any of its three channels is excluded entirely.
    let mut columns: Vec<(Landmark, [usize; 3])> = Vec::new();
    for &landmark in tracked {
        let indices = ['x', 'y', 'z'].map(|axis| column_index(&landmark.position_column(axis)));
        match indices {
            [Some(x), Some(y), Some(z)] => columns.push((landmark, [x, y, z])),
            _ => debug!("{landmark}: coordinate columns incomplete, excluded from analysis"),
        }
    }

    let mut time = Vec::new();
    let mut axes: Vec<[Vec<f64>; 3]> = vec![[Vec::new(), Vec::new(), Vec::new()]; columns.len()];

    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        let cell = |index: usize| -> Result<f64> {
            let value = record.get(index).unwrap_or("");
            value.parse::<f64>().map_err(|_| Error::InvalidCell {
                row,
                column: headers.get(index).unwrap_or("").to_string(),
                value: value.to_string(),
            })
        };

        if let Some(index) = time_index {
            time.push(cell(index)?);
        }
        for ((_, indices), series) in columns.iter().zip(&mut axes) {
            for (axis, &index) in series.iter_mut().zip(indices) {
                axis.push(cell(index)?);
            }
        }
    }

    let mut store = TrajectoryStore::new();
    store.set_time_axis(time);
    for ((landmark, _), [x, y, z]) in columns.into_iter().zip(axes) {
        store.insert(landmark, Trajectory::new(x, y, z)?);
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_LANDMARK_CSV: &str = "\
frame,t_sec,x_world_RIGHT_WRIST,y_world_RIGHT_WRIST,z_world_RIGHT_WRIST,x_world_LEFT_WRIST,y_world_LEFT_WRIST
0,0.0,0.1,0.2,0.3,1.0,1.0
1,0.033,0.2,0.3,0.4,1.0,1.0
2,0.066,0.3,0.4,0.5,1.0,1.0
";

    #[test]
    fn test_complete_landmark_is_loaded() {
        let store = parse_wide_csv(
            TWO_LANDMARK_CSV.as_bytes(),
            &[Landmark::RightWrist, Landmark::LeftWrist],
        )
        .unwrap();
        let trajectory = store.get(Landmark::RightWrist).unwrap();
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.x(), &[0.1, 0.2, 0.3]);
        assert_eq!(trajectory.z(), &[0.3, 0.4, 0.5]);
        assert_eq!(store.time_axis(), &[0.0, 0.033, 0.066]);
    }

    #[test]
    fn test_landmark_with_missing_axis_is_silently_excluded() {
        // LEFT_WRIST has no z column, so it never reaches computation
        let store = parse_wide_csv(
            TWO_LANDMARK_CSV.as_bytes(),
            &[Landmark::RightWrist, Landmark::LeftWrist],
        )
        .unwrap();
        assert!(store.get(Landmark::LeftWrist).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_untracked_landmarks_are_ignored() {
        let store = parse_wide_csv(TWO_LANDMARK_CSV.as_bytes(), &[Landmark::LeftAnkle]).unwrap();
        assert!(store.is_empty());
        // the time axis is still read
        assert_eq!(store.time_axis().len(), 3);
    }

    #[test]
    fn test_unparseable_cell_is_a_hard_error() {
        let csv = "\
t_sec,x_world_RIGHT_WRIST,y_world_RIGHT_WRIST,z_world_RIGHT_WRIST
0.0,0.1,0.2,0.3
0.033,oops,0.3,0.4
";
        let result = parse_wide_csv(csv.as_bytes(), &[Landmark::RightWrist]);
        match result {
            Err(Error::InvalidCell { row, column, value }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "x_world_RIGHT_WRIST");
                assert_eq!(value, "oops");
            }
            other => panic!("expected InvalidCell, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_time_column_leaves_axis_empty() {
        let csv = "\
x_world_RIGHT_WRIST,y_world_RIGHT_WRIST,z_world_RIGHT_WRIST
0.1,0.2,0.3
0.2,0.3,0.4
";
        let store = parse_wide_csv(csv.as_bytes(), &[Landmark::RightWrist]).unwrap();
        assert!(store.time_axis().is_empty());
        assert_eq!(store.get(Landmark::RightWrist).unwrap().len(), 2);
    }
}
