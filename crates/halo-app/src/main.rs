//! The `halo` binary: renders atmosphere frames to PNG files.

mod frames;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use halo_config::{CliArgs, Config, ConfigError, default_config_dir};
use halo_render::{FrameRenderer, RenderError};
use tracing::info;

use crate::frames::{FrameSchedule, frame_params, sun_orbit};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("no platform config directory; pass --config <dir>")]
    NoConfigDir,
}

fn resolve_config_dir(args: &CliArgs) -> Result<PathBuf, AppError> {
    args.config
        .clone()
        .or_else(default_config_dir)
        .ok_or(AppError::NoConfigDir)
}

fn run() -> Result<(), AppError> {
    let args = CliArgs::parse();
    let config_dir = resolve_config_dir(&args)?;

    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    halo_log::init_logging(Some(&log_dir), config.debug.log_to_file, Some(&config));

    let renderer = match config.render.threads {
        0 => FrameRenderer::with_defaults(),
        n => FrameRenderer::new(n),
    };
    let orbit = sun_orbit(&config);
    let schedule = FrameSchedule::from_config(&config);

    info!(
        "Rendering {} frame(s) at {}x{} from t={:.3}s",
        schedule.count, config.output.width, config.output.height, schedule.start_time
    );

    let start = Instant::now();
    for index in 0..schedule.count {
        let time = schedule.time_at(index);
        let image = renderer.render(&frame_params(&config, &orbit, time))?;
        let path = schedule.path_at(index);
        image.save_png(&path)?;
        info!("Wrote {}", path.display());
    }

    info!(
        "Finished {} frame(s) in {:.2}s",
        renderer.frames_rendered(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("halo: {e}");
        std::process::exit(1);
    }
}
