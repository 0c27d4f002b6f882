//! Movement phase detection over a wide pose CSV.

use anyhow::Result;
use clap::Parser;
use log::info;
use movement_phase_detection::app::PhaseApp;
use movement_phase_detection::config::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Wide-format pose CSV to analyze
    input: PathBuf,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Explicit sampling rate in frames per second (otherwise inferred)
    #[arg(long)]
    fps: Option<f64>,

    /// Write the detection result as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Movement Phase Detection");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Command line rate override wins over the configuration file
    if args.fps.is_some() {
        config.sampling.fps_override = args.fps;
    }

    let app = PhaseApp::new(config, args.input, args.output)?;
    app.run()?;

    Ok(())
}
