//! Benchmarks for the velocity, normalization, and segmentation stages

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use movement_phase_detection::landmark::Landmark;
use movement_phase_detection::phase_detection::PhaseDetector;
use movement_phase_detection::segmentation::detect_intervals;
use movement_phase_detection::trajectory::{Trajectory, TrajectoryStore};
use movement_phase_detection::velocity::compute_velocity;
use movement_phase_detection::zscore::compute_zscore;

/// Noisy position track with occasional movement bursts
fn synthetic_positions(frames: usize) -> Vec<f64> {
    let mut positions = Vec::with_capacity(frames);
    let mut x = 0.0;
    for i in 0..frames {
        let burst = if (i / 100) % 3 == 0 { 0.05 } else { 0.002 };
        x += burst + 0.001 * rand::random::<f64>();
        positions.push(x);
    }
    positions
}

fn benchmark_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_stages");

    for frames in [300usize, 3_000, 30_000] {
        let positions = synthetic_positions(frames);
        let trajectory = Trajectory::new(
            positions.clone(),
            positions.iter().map(|p| p * 0.5).collect(),
            vec![0.0; frames],
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::new("compute_velocity", frames), &trajectory, |b, t| {
            b.iter(|| black_box(compute_velocity(black_box(t), Some(30.0)).unwrap()));
        });

        let profile = compute_velocity(&trajectory, Some(30.0)).unwrap();
        group.bench_with_input(BenchmarkId::new("compute_zscore", frames), profile.speed(), |b, s| {
            b.iter(|| black_box(compute_zscore(black_box(s))));
        });

        let z_scores = compute_zscore(profile.speed());
        group.bench_with_input(BenchmarkId::new("detect_intervals", frames), &z_scores, |b, z| {
            b.iter(|| black_box(detect_intervals(black_box(z), 7)));
        });
    }

    group.finish();
}

fn benchmark_full_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_detection");

    for landmarks in [1usize, 6, 12] {
        let mut store = TrajectoryStore::new();
        for &landmark in Landmark::ALL.iter().take(landmarks) {
            let positions = synthetic_positions(3_000);
            store.insert(
                landmark,
                Trajectory::new(positions.clone(), positions, vec![0.0; 3_000]).unwrap(),
            );
        }
        store.set_time_axis((0..3_000).map(|i| i as f64 / 30.0).collect());

        let detector = PhaseDetector::new();
        group.bench_with_input(
            BenchmarkId::new("detect_3000_frames", landmarks),
            &store,
            |b, s| {
                b.iter(|| black_box(detector.detect(black_box(s))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_stages, benchmark_full_detection);
criterion_main!(benches);
