//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sightline_visibility::{CullingMode, FaceSet};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Occlusion culling settings.
    pub culling: CullingConfig,
    /// Probe tool settings.
    pub probe: ProbeConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Occlusion culling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CullingConfig {
    /// Follow only faces reachable through section geometry. When off, every
    /// face of every visited section is treated as reachable.
    pub occlusion_culling: bool,
    /// Faces a probed section is assumed to be entered through.
    pub default_incoming: FaceSet,
}

/// Probe tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Scene file to load when none is given on the command line.
    pub scene: Option<PathBuf>,
    /// Print the decoded 6×6 matrix for every cell.
    pub print_matrix: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for CullingConfig {
    fn default() -> Self {
        Self {
            occlusion_culling: true,
            default_incoming: FaceSet::ALL,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl CullingConfig {
    /// Culling mode selected by [`Self::occlusion_culling`].
    pub fn mode(&self) -> CullingMode {
        CullingMode::from_enabled(self.occlusion_culling)
    }
}

/// Platform config directory for sightline (e.g. `~/.config/sightline`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("sightline"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Re-read the file: returns `Some(new_config)` if it changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
