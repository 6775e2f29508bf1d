//! Renderer settings: image size, camera, sun orbit, frame scheduling and
//! logging.
//!
//! Settings live in `config.ron` under the platform config directory. Missing
//! fields take their defaults and unknown fields are ignored, so older files
//! keep loading. Command-line flags override individual fields after load.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DebugConfig, OutputConfig, RenderConfig, SunConfig, config_path,
    default_config_dir,
};
pub use error::ConfigError;
