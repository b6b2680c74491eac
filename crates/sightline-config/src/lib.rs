//! Configuration for the sightline tools.
//!
//! Settings persist to disk as `config.ron`, can be overridden from the
//! command line via clap, and tolerate missing or unknown fields so old and
//! new config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, CullingConfig, DebugConfig, ProbeConfig, default_config_dir};
pub use error::ConfigError;
