//! View-ray generation from a pixel coordinate.

use glam::{Vec2, Vec3};

use crate::constants::{FALLBACK_UP, PROJECTION_BLEND, PROJECTION_RADIUS, WORLD_UP};

/// Below this squared length the `forward x up` cross product is treated as
/// degenerate.
const DEGENERATE_CROSS_SQ: f32 = 1e-8;

/// Orthonormal camera frame built from a forward direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBasis {
    /// Unit view direction at the image center.
    pub forward: Vec3,
    /// Unit screen-right direction.
    pub right: Vec3,
    /// Unit screen-up direction.
    pub up: Vec3,
}

impl CameraBasis {
    /// Build the basis from `forward` (any non-zero magnitude) and [`WORLD_UP`].
    ///
    /// When `forward` is parallel to [`WORLD_UP`], [`FALLBACK_UP`] takes its
    /// place. A zero `forward` looks down `-Z`.
    pub fn new(forward: Vec3) -> Self {
        let forward = forward.try_normalize().unwrap_or(Vec3::NEG_Z);
        let mut right = forward.cross(WORLD_UP);
        if right.length_squared() < DEGENERATE_CROSS_SQ {
            right = forward.cross(FALLBACK_UP);
        }
        let right = right.normalize();
        let up = right.cross(forward);
        Self { forward, right, up }
    }
}

/// Center a pixel coordinate and scale it by the wider image axis.
///
/// The wider axis spans `[-0.5, 0.5]`; the other axis spans the same range
/// scaled by the aspect ratio. Both stay inside `[-0.5, 0.5]`, below the pole
/// of the tangent projection.
pub fn screen_uv(coord: Vec2, resolution: Vec2) -> Vec2 {
    (coord - resolution * 0.5) / resolution.max_element()
}

/// World-space direction through the pixel at `coord`.
///
/// Blends a linear mapping with a tangent (perspective) mapping to soften
/// distortion at wide angles.
pub fn view_direction(coord: Vec2, resolution: Vec2, basis: &CameraBasis) -> Vec3 {
    let uv = screen_uv(coord, resolution);
    let r = PROJECTION_RADIUS;
    let tangent = Vec2::new((uv.x / r).tan(), (uv.y / r).tan()) * r;
    let projected = uv.lerp(tangent, PROJECTION_BLEND);
    (basis.forward * r + basis.right * projected.x + basis.up * projected.y).normalize()
}
