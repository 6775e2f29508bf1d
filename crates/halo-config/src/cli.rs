//! Command-line argument parsing for the Halo renderer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Halo command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "halo", about = "Per-pixel planetary atmosphere renderer")]
pub struct CliArgs {
    /// Output width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Output PNG path.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Camera position as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub camera: Option<[f32; 3]>,

    /// Camera forward direction as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub forward: Option<[f32; 3]>,

    /// Sun direction at time zero as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub sun: Option<[f32; 3]>,

    /// Elapsed time of the first frame, in seconds.
    #[arg(long)]
    pub time: Option<f32>,

    /// Number of frames to render.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Worker threads (0 = automatic).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Parse `x,y,z` into three floats. Any other count is an error.
fn parse_vec3(arg: &str) -> Result<[f32; 3], String> {
    let values = arg
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|e| format!("`{part}` is not a number: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    <[f32; 3]>::try_from(values.as_slice())
        .map_err(|_| format!("expected 3 comma-separated values, got {}", values.len()))
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.output.width = w;
        }
        if let Some(h) = args.height {
            self.output.height = h;
        }
        if let Some(ref path) = args.output {
            self.output.path = path.clone();
        }
        if let Some(position) = args.camera {
            self.camera.position = position;
        }
        if let Some(forward) = args.forward {
            self.camera.forward = forward;
        }
        if let Some(sun) = args.sun {
            self.sun.direction = sun;
        }
        if let Some(time) = args.time {
            self.render.start_time = time;
        }
        if let Some(frames) = args.frames {
            self.render.frames = frames;
        }
        if let Some(threads) = args.threads {
            self.render.threads = threads;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            camera: Some([0.0, 105.0, 0.0]),
            log_level: Some("debug".to_string()),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.output.width, 1920);
        assert_eq!(config.camera.position, [0.0, 105.0, 0.0]);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.output.height, 512);
        assert_eq!(config.camera.forward, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_vector_arguments() {
        let args = CliArgs::parse_from([
            "halo",
            "--camera",
            "0,0,270",
            "--forward",
            "0,-0.5,-1",
            "--frames",
            "4",
        ]);
        let mut config = Config::default();
        config.apply_cli_overrides(&args);
        assert_eq!(config.camera.position, [0.0, 0.0, 270.0]);
        assert_eq!(config.camera.forward, [0.0, -0.5, -1.0]);
        assert_eq!(config.render.frames, 4);
    }

    #[test]
    fn test_wrong_arity_rejected() {
        for bad in ["1,2", "1,2,3,4"] {
            let result = CliArgs::try_parse_from(["halo", "--sun", bad]);
            let err = result.expect_err("vector flags need exactly three values");
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn test_non_numeric_component_rejected() {
        let result = CliArgs::try_parse_from(["halo", "--camera", "0,up,270"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_components_parse() {
        let args = CliArgs::parse_from(["halo", "--forward", "-1,-0.25,0"]);
        assert_eq!(args.forward, Some([-1.0, -0.25, 0.0]));
    }
}
