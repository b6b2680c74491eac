//! Probe error types.

use std::path::PathBuf;

use sightline_config::ConfigError;

/// Errors that stop a probe run.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Loading or creating the config failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The scene file could not be read.
    #[error("failed to read scene {path}: {source}")]
    ReadScene {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scene file is not valid RON.
    #[error("failed to parse scene {path}: {source}")]
    ParseScene {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}
