//! Structured logging for the sightline tools.
//!
//! Wraps `tracing-subscriber`: console output with uptime timestamps and
//! targets, optional JSON file output in debug builds, and filtering from
//! `RUST_LOG` or the configured log level.

use std::path::Path;

use sightline_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "sightline.log";

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - Directory for the JSON log file (debug builds only)
/// * `debug_build` - Whether to also write the JSON log file
/// * `config` - Optional configuration supplying `debug.log_level`
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
///
/// # Examples
///
/// ```no_run
/// use sightline_config::Config;
/// use sightline_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Filter directives derived from the config, falling back to [`DEFAULT_FILTER`].
pub fn filter_directives(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
