//! Diffuse planet shading, attenuated by the atmosphere between the surface and
//! the camera.

use glam::Vec3;

use crate::constants::{SCATTERING_CONSTANT, SURFACE_ALBEDO};
use crate::intersect::RayHit;
use crate::optical_depth::optical_depth_between;

/// Lambert term at a planet surface point. Not clamped: the night side goes
/// negative and is left for the display to clip.
pub fn diffuse(hit_point: Vec3, sun_dir: Vec3) -> f32 {
    hit_point.normalize().dot(sun_dir)
}

/// Planet color seen along `dir` from `camera`, or zero if the ray misses.
///
/// `planet` is the view ray's intersection with the planet, as returned by
/// [`ray_sphere`](crate::intersect::ray_sphere) with
/// [`WORLD_RADIUS`](crate::constants::WORLD_RADIUS).
pub fn shade_surface(camera: Vec3, dir: Vec3, sun_dir: Vec3, planet: Option<RayHit>) -> Vec3 {
    let Some(hit) = planet else {
        return Vec3::ZERO;
    };

    let hit_point = camera + dir * hit.entry;
    let depth = optical_depth_between(hit_point, camera, -dir);
    let attenuation = (-depth * SCATTERING_CONSTANT).exp();

    SURFACE_ALBEDO * diffuse(hit_point, sun_dir) * attenuation
}
