//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_NAME: &str = "halo";
const CONFIG_FILE: &str = "config.ron";

/// Top-level renderer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Output image settings.
    pub output: OutputConfig,
    /// Camera placement.
    pub camera: CameraConfig,
    /// Sun direction and orbit.
    pub sun: SunConfig,
    /// Frame scheduling and worker pool.
    pub render: RenderConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Output image configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Destination PNG. Multi-frame runs append `_NNNN` to the file stem.
    pub path: PathBuf,
}

/// Camera configuration, in world units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position. The planet sits at the origin with radius 100.
    pub position: [f32; 3],
    /// View direction at the image center. Need not be normalized.
    pub forward: [f32; 3],
}

/// Sun configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SunConfig {
    /// Direction toward the sun at time zero. Need not be normalized.
    pub direction: [f32; 3],
    /// Axis the sun direction rotates around.
    pub orbit_axis: [f32; 3],
    /// Seconds per full orbit (0 = stationary sun).
    pub orbit_period_seconds: f32,
}

/// Frame scheduling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Worker threads (0 = one less than the number of CPUs).
    pub threads: usize,
    /// Elapsed time of the first frame, in seconds.
    pub start_time: f32,
    /// Number of frames to render.
    pub frames: u32,
    /// Elapsed time between consecutive frames, in seconds.
    pub frame_interval_seconds: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to the log directory.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            path: PathBuf::from("halo.png"),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 270.0],
            forward: [0.0, 0.0, -1.0],
        }
    }
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            direction: [0.2, 0.2, 0.96],
            orbit_axis: [0.0, 1.0, 0.0],
            orbit_period_seconds: 60.0,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            start_time: 0.0,
            frames: 1,
            frame_interval_seconds: 1.0 / 30.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

/// Platform config directory for Halo, e.g. `~/.config/halo` on Linux.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

/// Location of the config file inside `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE)
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Read `config.ron` from `config_dir`, writing the defaults there first
    /// if it does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_path(config_dir);
        if !path.exists() {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Wrote default config to {}", path.display());
            return Ok(config);
        }
        let config = read_config(&path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write this config to `config_dir/config.ron` as pretty RON.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let path = config_path(config_dir);
        let write_error = |source: std::io::Error| ConfigError::WriteError {
            path: path.clone(),
            source,
        };
        std::fs::create_dir_all(config_dir).map_err(write_error)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .separate_tuple_members(false)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&path, serialized).map_err(write_error)
    }
}
