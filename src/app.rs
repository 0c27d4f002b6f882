//! Main application module wiring ingestion, detection, and reporting.

use crate::config::Config;
use crate::ingest::load_trajectories;
use crate::phase_detection::{PhaseDetectionResult, PhaseDetector};
use crate::Result;
use log::{info, warn};
use std::path::PathBuf;

/// End-to-end analysis run over one wide pose CSV
pub struct PhaseApp {
    config: Config,
    input: PathBuf,
    output: Option<PathBuf>,
}

impl PhaseApp {
    /// Create an application for one input file.
    ///
    /// Fails when the configuration does not validate.
    pub fn new(config: Config, input: PathBuf, output: Option<PathBuf>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, input, output })
    }

    /// Ingest the input, detect movement phases, report, and optionally
    /// export the result as JSON
    pub fn run(&self) -> Result<PhaseDetectionResult> {
        let store = load_trajectories(&self.input, &self.config.landmarks.tracked)?;
        if store.is_empty() {
            warn!("No tracked landmark has complete coordinate columns in the input");
        }

        let detector = PhaseDetector::from_config(&self.config);
        let result = detector.detect(&store);

        for (landmark, outcome) in &result.landmarks {
            match &outcome.error {
                Some(reason) => info!("{landmark}: no intervals ({reason})"),
                None => info!("{landmark}: {} movement interval(s)", outcome.intervals.len()),
            }
        }
        info!("Detected {} interval(s) in total", result.interval_count());

        if let Some(path) = &self.output {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| crate::Error::InvalidInput(format!("Failed to serialize result: {e}")))?;
            std::fs::write(path, json)?;
            info!("Result written to {}", path.display());
        }

        Ok(result)
    }
}
