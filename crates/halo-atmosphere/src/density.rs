//! Exponential atmosphere density as a function of height.

use glam::Vec3;

use crate::constants::{ATM_RADIUS, DENSITY_FALLOFF, WORLD_RADIUS};

/// Atmosphere density at `position`.
///
/// 1.0 at the planet surface and decaying exponentially with altitude. Not
/// clamped: points below the surface return values above 1.0.
pub fn density_at(position: Vec3) -> f32 {
    let height = position.length() - WORLD_RADIUS;
    let scaled_height = height / (ATM_RADIUS - WORLD_RADIUS);
    (-scaled_height * DENSITY_FALLOFF).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_density_at_surface() {
        let d = density_at(Vec3::new(0.0, WORLD_RADIUS, 0.0));
        assert!((d - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_density_at_shell_top() {
        let d = density_at(Vec3::new(ATM_RADIUS, 0.0, 0.0));
        assert!((d - (-DENSITY_FALLOFF).exp()).abs() < 1e-6);
    }

    #[test]
    fn test_density_monotonic_in_height() {
        let mut previous = f32::INFINITY;
        for i in 0..200 {
            let radius = WORLD_RADIUS - 5.0 + i as f32 * 0.25;
            let d = density_at(Vec3::new(0.0, 0.0, radius));
            assert!(d <= previous, "density rose at radius {radius}");
            previous = d;
        }
    }

    #[test]
    fn test_density_depends_only_on_radius() {
        let a = density_at(Vec3::new(110.0, 0.0, 0.0));
        let b = density_at(Vec3::new(0.0, -110.0, 0.0));
        let c = density_at(Vec3::new(0.6, 0.0, 0.8) * 110.0);
        assert!((a - b).abs() < 1e-6);
        assert!((a - c).abs() < 1e-6);
    }

    #[test]
    fn test_below_surface_not_clamped() {
        assert!(density_at(Vec3::new(0.0, 90.0, 0.0)) > 1.0);
    }
}
