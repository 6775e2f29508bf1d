//! Per-frame parameters and the per-pixel compositor.

use glam::{Vec2, Vec3, Vec4};

use crate::camera::{CameraBasis, view_direction};
use crate::constants::{ATM_RADIUS, WORLD_RADIUS};
use crate::intersect::ray_sphere;
use crate::scatter::{DepthConvention, in_scatter, scatter_coefficients};
use crate::starfield::starfield;
use crate::surface::shade_surface;

/// Everything the host supplies for one frame.
///
/// Directions may have any non-zero magnitude; they are normalized when the
/// frame is prepared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    /// Elapsed time in seconds.
    pub time: f32,
    /// Output size in samples (width, height).
    pub resolution: Vec2,
    /// Camera position in world units.
    pub camera_position: Vec3,
    /// Camera view direction at the image center.
    pub camera_forward: Vec3,
    /// Direction toward the sun.
    pub sun_direction: Vec3,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            time: 0.0,
            resolution: Vec2::new(512.0, 512.0),
            camera_position: Vec3::new(0.0, 0.0, 270.0),
            camera_forward: Vec3::NEG_Z,
            sun_direction: Vec3::new(0.2, 0.2, 0.96),
        }
    }
}

/// Values derived once per frame and shared read-only by every pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    /// The parameters this context was prepared from.
    pub params: FrameParams,
    /// Camera frame built from `params.camera_forward`.
    pub basis: CameraBasis,
    /// Unit sun direction.
    pub sun_dir: Vec3,
    /// Per-channel scattering coefficients.
    pub coefficients: Vec3,
}

impl FrameContext {
    /// Normalize the frame's directions and precompute shared terms.
    pub fn new(params: FrameParams) -> Self {
        Self {
            params,
            basis: CameraBasis::new(params.camera_forward),
            sun_dir: params.sun_direction.try_normalize().unwrap_or(Vec3::Y),
            coefficients: scatter_coefficients(),
        }
    }

    /// World-space view direction through `coord`.
    pub fn view_direction(&self, coord: Vec2) -> Vec3 {
        view_direction(coord, self.params.resolution, &self.basis)
    }

    /// The three light contributions seen through `coord`.
    ///
    /// `coord` is in sample units with the origin at the bottom-left corner.
    pub fn contributions(&self, coord: Vec2) -> PixelContributions {
        let camera = self.params.camera_position;
        let dir = self.view_direction(coord);

        let planet = ray_sphere(camera, dir, WORLD_RADIUS);
        let atmosphere = ray_sphere(camera, dir, ATM_RADIUS);

        let scatter = match atmosphere {
            Some(shell) => {
                // Samples below the surface would be lit through the planet.
                let length = match planet {
                    Some(ground) => shell.length.min(ground.entry - shell.entry),
                    None => shell.length,
                };
                if length > 0.0 {
                    in_scatter(
                        camera + dir * shell.entry,
                        dir,
                        length,
                        self.sun_dir,
                        self.coefficients,
                        DepthConvention::select(atmosphere, planet),
                    )
                } else {
                    Vec3::ZERO
                }
            }
            None => Vec3::ZERO,
        };

        let surface = shade_surface(camera, dir, self.sun_dir, planet);
        let stars = starfield(dir, scatter + surface);

        PixelContributions {
            scatter,
            surface,
            stars,
        }
    }

    /// Final RGBA color at `coord`.
    pub fn shade(&self, coord: Vec2) -> Vec4 {
        self.contributions(coord).composite()
    }
}

/// The independent light terms of one pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelContributions {
    /// Sunlight scattered by the atmosphere toward the camera.
    pub scatter: Vec3,
    /// Diffuse planet surface.
    pub surface: Vec3,
    /// Background stars.
    pub stars: Vec3,
}

impl PixelContributions {
    /// Sum of all terms with opaque alpha. No tone mapping or clamping.
    pub fn composite(&self) -> Vec4 {
        (self.scatter + self.surface + self.stars).extend(1.0)
    }
}

/// Shade a single pixel from raw frame parameters.
///
/// Prefer building one [`FrameContext`] per frame when shading many pixels.
pub fn shade_pixel(coord: Vec2, params: &FrameParams) -> Vec4 {
    FrameContext::new(*params).shade(coord)
}
