//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use sightline_visibility::Face;

use crate::Config;

/// Sightline probe command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "sightline-probe", about = "Query packed section visibility")]
pub struct CliArgs {
    /// Scene file (RON) listing the cells to probe.
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Incoming faces, comma separated (e.g. `down,north`).
    #[arg(long, value_delimiter = ',')]
    pub incoming: Option<Vec<Face>>,

    /// Treat every face as reachable, ignoring occlusion data.
    #[arg(long)]
    pub no_occlusion_culling: bool,

    /// Print the decoded matrix for every cell.
    #[arg(long)]
    pub print_matrix: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref scene) = args.scene {
            self.probe.scene = Some(scene.clone());
        }
        if let Some(ref faces) = args.incoming {
            self.culling.default_incoming = faces.iter().copied().collect();
        }
        if args.no_occlusion_culling {
            self.culling.occlusion_culling = false;
        }
        if args.print_matrix {
            self.probe.print_matrix = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
