//! tremor-check demo
//!
//! Runs the analyzers headlessly against simulated captures and prints the
//! resulting session record as JSON. An optional first argument names a
//! TOML config file; otherwise the platform default location is used.

use anyhow::Context;
use tremor_check::{
    analysis::{line_smoothness_metrics, score_path_match, summarize_capture},
    config::AnalysisConfig,
    logging,
    reference::{archimedean_spiral, sine_guide},
    simulate::{simulate_capture, simulate_trace},
    SessionResult,
};

const CANVAS_WIDTH: f64 = 400.0;
const CANVAS_HEIGHT: f64 = 400.0;
const TRACE_JITTER_PX: f64 = 6.0;
const POINTER_INTERVAL_MS: f64 = 16.0;
const SEED: u64 = 5;

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("Starting tremor-check demo");

    let config = match std::env::args().nth(1) {
        Some(path) => AnalysisConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => match AnalysisConfig::default_path() {
            Ok(path) => AnalysisConfig::load_or_default(path),
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                AnalysisConfig::default()
            }
        },
    };

    // Simulate the full capture window the user would record
    let simulation = config
        .simulation
        .clone()
        .with_duration(config.capture.capture_secs);
    let series = simulate_capture(&simulation, SEED).context("Simulating capture")?;
    let capture = summarize_capture(&series, &config.capture).context("Summarizing capture")?;

    let spiral = archimedean_spiral(CANVAS_WIDTH, CANVAS_HEIGHT, &config.spiral);
    let drawn = simulate_trace(&spiral, TRACE_JITTER_PX, POINTER_INTERVAL_MS, SEED);
    let trace = score_path_match(&spiral, &drawn, CANVAS_WIDTH, CANVAS_HEIGHT)
        .context("Scoring spiral trace")?;

    let guide = sine_guide(CANVAS_WIDTH, CANVAS_HEIGHT, &config.line);
    let drawn_line = simulate_trace(&guide, TRACE_JITTER_PX, POINTER_INTERVAL_MS, SEED + 1);
    let line = line_smoothness_metrics(&drawn_line, &guide).context("Scoring line trace")?;

    let session = SessionResult::new()
        .with_capture(capture)
        .with_trace(trace)
        .with_line(line);

    tracing::info!("{}", session.summary());
    println!("{}", session.to_json()?);

    Ok(())
}
