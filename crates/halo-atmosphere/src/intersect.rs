//! Analytic ray-sphere intersection against origin-centered spheres.

use glam::Vec3;

/// The part of a ray that lies inside a sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the entry point. Zero when the origin is
    /// already inside the sphere.
    pub entry: f32,
    /// Chord length from the entry point to the exit point.
    pub length: f32,
}

impl RayHit {
    /// Distance from the ray origin to the exit point.
    pub fn exit(&self) -> f32 {
        self.entry + self.length
    }

    /// Returns `true` if the ray origin lies inside (or on) the sphere.
    pub fn starts_inside(&self) -> bool {
        self.entry == 0.0
    }
}

/// Intersect a ray with the sphere of `radius` centered at the world origin.
///
/// `dir` must be normalized. Returns `None` when the ray misses the sphere or
/// when the whole sphere lies behind the ray origin.
pub fn ray_sphere(origin: Vec3, dir: Vec3, radius: f32) -> Option<RayHit> {
    let b = 2.0 * origin.dot(dir);
    let c = origin.dot(origin) - radius * radius;
    let disc = b * b - 4.0 * c;
    if disc < 0.0 {
        return None;
    }

    let s = disc.sqrt();
    let near = (-(b + s) / 2.0).max(0.0);
    let far = -(b - s) / 2.0;
    if far < 0.0 {
        return None;
    }

    Some(RayHit {
        entry: near,
        length: far - near,
    })
}
