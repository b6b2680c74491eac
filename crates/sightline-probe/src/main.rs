//! Probe binary: encodes the cells of a scene file and prints what each cell
//! lets through.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p sightline-probe -- --incoming down,north` to probe a
//! specific incoming set against the built-in scene.

mod error;
mod report;
mod scene;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sightline_config::{CliArgs, Config, default_config_dir};
use tracing::info;

use crate::error::ProbeError;
use crate::report::probe_cell;
use crate::scene::Scene;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match resolve_config_dir(&args) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    sightline_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_config_dir(args: &CliArgs) -> Result<PathBuf, ProbeError> {
    match &args.config {
        Some(dir) => Ok(dir.clone()),
        None => Ok(default_config_dir()?),
    }
}

fn run(config: &Config) -> Result<(), ProbeError> {
    let scene = match &config.probe.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::builtin()?,
    };

    let incoming = config.culling.default_incoming;
    let mode = config.culling.mode();
    info!(
        "Probing {} cells, incoming={}, mode={:?}",
        scene.cells.len(),
        incoming,
        mode
    );

    for cell in &scene.cells {
        let report = probe_cell(cell, incoming, mode, config.probe.print_matrix);
        if !report.packed.is_canonical() {
            tracing::warn!("cell {} has a non-canonical visibility word", report.name);
        }
        println!("{report}");
    }

    Ok(())
}
