//! Frame scheduling: when each frame happens, where it is written, and what
//! the atmosphere shader sees for it.

use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3};
use halo_atmosphere::FrameParams;
use halo_config::Config;
use halo_render::SunOrbit;

/// The sequence of frames one run renders.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSchedule {
    pub start_time: f32,
    pub interval: f32,
    pub count: u32,
    pub output: PathBuf,
}

impl FrameSchedule {
    pub fn from_config(config: &Config) -> Self {
        Self {
            start_time: config.render.start_time,
            interval: config.render.frame_interval_seconds,
            count: config.render.frames,
            output: config.output.path.clone(),
        }
    }

    /// Elapsed time of frame `index`, in seconds.
    pub fn time_at(&self, index: u32) -> f32 {
        self.start_time + index as f32 * self.interval
    }

    /// Output path of frame `index`.
    ///
    /// Single-frame runs write to the configured path unchanged. Longer runs
    /// append a zero-padded index to the file stem: `sky.png` becomes
    /// `sky_0000.png`, `sky_0001.png`, ...
    pub fn path_at(&self, index: u32) -> PathBuf {
        if self.count <= 1 {
            return self.output.clone();
        }
        numbered_path(&self.output, index)
    }
}

fn numbered_path(path: &Path, index: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    path.with_file_name(format!("{stem}_{index:04}.{extension}"))
}

/// Build the shader inputs for one frame from the config and sun orbit.
pub fn frame_params(config: &Config, orbit: &SunOrbit, time: f32) -> FrameParams {
    FrameParams {
        time,
        resolution: Vec2::new(config.output.width as f32, config.output.height as f32),
        camera_position: Vec3::from_array(config.camera.position),
        camera_forward: Vec3::from_array(config.camera.forward),
        sun_direction: orbit.direction_at(time),
    }
}

/// The sun orbit described by the config.
pub fn sun_orbit(config: &Config) -> SunOrbit {
    SunOrbit::new(
        Vec3::from_array(config.sun.direction),
        Vec3::from_array(config.sun.orbit_axis),
        config.sun.orbit_period_seconds,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(count: u32, output: &str) -> FrameSchedule {
        FrameSchedule {
            start_time: 2.0,
            interval: 0.5,
            count,
            output: PathBuf::from(output),
        }
    }

    #[test]
    fn test_single_frame_keeps_path() {
        let s = schedule(1, "out/sky.png");
        assert_eq!(s.path_at(0), PathBuf::from("out/sky.png"));
    }

    #[test]
    fn test_multi_frame_numbers_stem() {
        let s = schedule(3, "out/sky.png");
        assert_eq!(s.path_at(0), PathBuf::from("out/sky_0000.png"));
        assert_eq!(s.path_at(12), PathBuf::from("out/sky_0012.png"));
    }

    #[test]
    fn test_missing_extension_defaults_to_png() {
        let s = schedule(2, "render");
        assert_eq!(s.path_at(1), PathBuf::from("render_0001.png"));
    }

    #[test]
    fn test_frame_times() {
        let s = schedule(4, "sky.png");
        assert_eq!(s.time_at(0), 2.0);
        assert_eq!(s.time_at(3), 3.5);
    }

    #[test]
    fn test_frame_params_from_config() {
        let mut config = Config::default();
        config.output.width = 320;
        config.output.height = 200;
        config.sun.orbit_period_seconds = 0.0;
        let orbit = sun_orbit(&config);
        let params = frame_params(&config, &orbit, 1.25);
        assert_eq!(params.resolution, Vec2::new(320.0, 200.0));
        assert_eq!(params.camera_position, Vec3::new(0.0, 0.0, 270.0));
        assert_eq!(params.time, 1.25);
        let expected = Vec3::new(0.2, 0.2, 0.96).normalize();
        assert!((params.sun_direction - expected).length() < 1e-6);
    }

    #[test]
    fn test_sun_moves_between_frames() {
        let config = Config::default();
        let orbit = sun_orbit(&config);
        let a = frame_params(&config, &orbit, 0.0).sun_direction;
        let b = frame_params(&config, &orbit, 15.0).sun_direction;
        assert!((a - b).length() > 0.1);
    }
}
