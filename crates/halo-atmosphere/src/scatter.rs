//! Single-scattering accumulation along the view ray.

use glam::Vec3;

use crate::constants::{N_STEPS, SCATTERING_CONSTANT, WAVELENGTHS};
use crate::density::density_at;
use crate::intersect::RayHit;
use crate::optical_depth::{optical_depth, optical_depth_between};

/// Per-channel scattering strength: `WAVELENGTHS^4 * SCATTERING_CONSTANT`.
///
/// Blue scatters most, red least.
pub fn scatter_coefficients() -> Vec3 {
    let w2 = WAVELENGTHS * WAVELENGTHS;
    w2 * w2 * SCATTERING_CONSTANT
}

/// Which end of the view segment the estimator differences are anchored to.
///
/// The closed-form estimator only describes rays that leave the atmosphere
/// without crossing the planet, so the view-ray depth up to a sample point is
/// taken along whichever direction satisfies that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthConvention {
    /// `depth(start, dir) - depth(sample, dir)`. The camera sits inside the
    /// atmosphere and the view ray escapes to space.
    Forward,
    /// `depth(sample, -dir) - depth(start, -dir)`. Every other case, looking
    /// back toward the camera from the sample point.
    Backward,
}

impl DepthConvention {
    /// Pick the convention for one pixel from its two intersections.
    ///
    /// Near the planet silhouette this choice is a heuristic and can leave a
    /// faint seam.
    pub fn select(atmosphere: Option<RayHit>, planet: Option<RayHit>) -> Self {
        match (atmosphere, planet) {
            (Some(shell), None) if shell.starts_inside() => Self::Forward,
            _ => Self::Backward,
        }
    }

    /// Optical depth of the view ray from `start` to `sample`.
    pub fn view_depth(self, start: Vec3, sample: Vec3, dir: Vec3) -> f32 {
        match self {
            Self::Forward => optical_depth_between(start, sample, dir),
            Self::Backward => optical_depth_between(sample, start, -dir),
        }
    }
}

/// Sunlight scattered toward the camera along `length` units of the view ray,
/// starting at `start`.
///
/// `dir` and `sun_dir` must be normalized. A zero `length` yields zero.
pub fn in_scatter(
    start: Vec3,
    dir: Vec3,
    length: f32,
    sun_dir: Vec3,
    coefficients: Vec3,
    convention: DepthConvention,
) -> Vec3 {
    let step = length / (N_STEPS - 1) as f32;
    let mut sample = start;
    let mut light = Vec3::ZERO;

    for _ in 0..N_STEPS {
        let sun_depth = optical_depth(sample, sun_dir);
        let view_depth = convention.view_depth(start, sample, dir);
        let tau = -(sun_depth + view_depth) * coefficients;
        let transmittance = Vec3::new(tau.x.exp(), tau.y.exp(), tau.z.exp());

        light += density_at(sample) * transmittance * coefficients * step;
        sample += dir * step;
    }

    light
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ATM_RADIUS, WORLD_RADIUS};
    use crate::intersect::ray_sphere;

    #[test]
    fn test_coefficients_ordered_blue_green_red() {
        let k = scatter_coefficients();
        assert!(k.z > k.y && k.y > k.x);
        let expected_red = (400.0_f32 / 700.0).powi(4) * SCATTERING_CONSTANT;
        assert!((k.x - expected_red).abs() < 1e-6);
    }

    #[test]
    fn test_zero_length_segment_is_dark() {
        let start = Vec3::new(0.0, 105.0, 0.0);
        let light = in_scatter(
            start,
            Vec3::Y,
            0.0,
            Vec3::Y,
            scatter_coefficients(),
            DepthConvention::Forward,
        );
        assert_eq!(light, Vec3::ZERO);
    }

    #[test]
    fn test_convention_selection() {
        let inside = Some(RayHit { entry: 0.0, length: 10.0 });
        let outside = Some(RayHit { entry: 5.0, length: 10.0 });
        let planet = Some(RayHit { entry: 3.0, length: 50.0 });

        assert_eq!(DepthConvention::select(inside, None), DepthConvention::Forward);
        assert_eq!(DepthConvention::select(inside, planet), DepthConvention::Backward);
        assert_eq!(DepthConvention::select(outside, None), DepthConvention::Backward);
        assert_eq!(DepthConvention::select(None, None), DepthConvention::Backward);
    }

    #[test]
    fn test_both_conventions_agree_at_segment_start() {
        let start = Vec3::new(0.0, 104.0, 0.0);
        let dir = Vec3::new(1.0, 0.4, 0.0).normalize();
        assert_eq!(DepthConvention::Forward.view_depth(start, start, dir), 0.0);
        assert_eq!(DepthConvention::Backward.view_depth(start, start, dir), 0.0);
    }

    #[test]
    fn test_sky_from_surface_is_blue() {
        let camera = Vec3::new(0.0, WORLD_RADIUS + 0.5, 0.0);
        let dir = Vec3::new(0.4, 1.0, 0.0).normalize();
        let shell = ray_sphere(camera, dir, ATM_RADIUS).unwrap();
        let light = in_scatter(
            camera,
            dir,
            shell.length,
            Vec3::new(0.0, 1.0, 0.3).normalize(),
            scatter_coefficients(),
            DepthConvention::select(Some(shell), None),
        );
        assert!(light.z > light.y && light.y > light.x, "sky color {light}");
        assert!(light.x > 0.0);
    }

    #[test]
    fn test_sun_behind_planet_darkens_sky() {
        let camera = Vec3::new(0.0, WORLD_RADIUS + 0.5, 0.0);
        let dir = Vec3::new(0.4, 1.0, 0.0).normalize();
        let shell = ray_sphere(camera, dir, ATM_RADIUS).unwrap();
        let k = scatter_coefficients();
        let day = in_scatter(camera, dir, shell.length, Vec3::Y, k, DepthConvention::Forward);
        let night = in_scatter(camera, dir, shell.length, Vec3::NEG_Y, k, DepthConvention::Forward);
        assert!(night.z < day.z * 0.01, "day {day}, night {night}");
    }

    #[test]
    fn test_longer_paths_scatter_more() {
        let start = Vec3::new(0.0, WORLD_RADIUS + 1.0, 0.0);
        let k = scatter_coefficients();
        let vertical = in_scatter(start, Vec3::Y, 19.0, Vec3::Y, k, DepthConvention::Forward);
        let shell = ray_sphere(start, Vec3::X, ATM_RADIUS).unwrap();
        let horizontal = in_scatter(start, Vec3::X, shell.length, Vec3::Y, k, DepthConvention::Forward);
        assert!(horizontal.x > vertical.x);
    }

    #[test]
    fn test_output_is_finite_for_grazing_rays() {
        let k = scatter_coefficients();
        let camera = Vec3::new(0.0, 0.0, 270.0);
        for i in 0..64 {
            let offset = 95.0 + i as f32 * 0.2;
            let dir = (Vec3::new(offset, 0.0, 0.0) - camera).normalize();
            let Some(shell) = ray_sphere(camera, dir, ATM_RADIUS) else {
                continue;
            };
            let planet = ray_sphere(camera, dir, WORLD_RADIUS);
            let length = planet.map_or(shell.length, |p| shell.length.min(p.entry - shell.entry));
            let light = in_scatter(
                camera + dir * shell.entry,
                dir,
                length,
                Vec3::new(1.0, 0.2, 0.1).normalize(),
                k,
                DepthConvention::select(Some(shell), planet),
            );
            assert!(light.is_finite(), "non-finite scatter at offset {offset}: {light}");
            assert!(light.min_element() >= 0.0);
        }
    }
}
