//! Closed-form optical depth estimator.
//!
//! Replaces the nested numerical integral of density along every sun ray and
//! view sub-ray with a single evaluation fitted to the same exponential
//! falloff. The fit is a function of the height of the ray origin and the
//! cosine between the ray and the local vertical only:
//!
//! ```text
//! scale = exp(1.07 + 2.1 * exp(-1.9 * cos) + 0.07 / (cos + 0.66)^2)
//! depth = exp(-0.35 * (height - WORLD_RADIUS)) * scale
//! ```
//!
//! It yields the total depth from a point to the atmosphere exit. The depth of a
//! finite segment is the difference of two evaluations taken along the same
//! direction, see [`optical_depth_between`].

use glam::Vec3;

use crate::constants::WORLD_RADIUS;

/// Vertical falloff of the fit, per world unit.
const HEIGHT_FALLOFF: f32 = 0.35;

/// The fit has a pole at `cos = -0.66`, roughly where rays graze the planet.
const POLE_COS: f32 = -0.66;

/// Smallest squared distance from the pole fed into the `0.07 / d^2` term.
const MIN_POLE_DISTANCE_SQ: f32 = 1e-3;

/// Largest exponent passed to `exp`; keeps the result finite in f32.
const MAX_LOG_DEPTH: f32 = 80.0;

/// Smallest origin radius used to derive the ray's cosine.
const MIN_HEIGHT: f32 = 1e-6;

/// Logarithm of the angular scale term for a ray whose direction makes
/// `cos_angle` with the local vertical.
fn log_scale(cos_angle: f32) -> f32 {
    let offset = cos_angle - POLE_COS;
    let pole_distance_sq = (offset * offset).max(MIN_POLE_DISTANCE_SQ);
    1.07 + 2.1 * (-1.9 * cos_angle).exp() + 0.07 / pole_distance_sq
}

/// Estimated optical depth from `origin` along `dir` to the edge of the
/// atmosphere.
///
/// `dir` must be normalized. Always finite and non-negative. Rays that head
/// into the planet yield very large values, which drive transmittance to 0.
pub fn optical_depth(origin: Vec3, dir: Vec3) -> f32 {
    let height = origin.length().max(MIN_HEIGHT);
    let cos_angle = (origin.dot(dir) / height).clamp(-1.0, 1.0);
    let log_depth = -HEIGHT_FALLOFF * (height - WORLD_RADIUS) + log_scale(cos_angle);
    log_depth.min(MAX_LOG_DEPTH).exp()
}

/// Optical depth of the segment from `near` to `far`, where `far` lies further
/// along `dir` than `near`.
///
/// Computed as the difference of two [`optical_depth`] evaluations along the
/// same direction. Floored at 0 where the fit is not monotonic.
pub fn optical_depth_between(near: Vec3, far: Vec3, dir: Vec3) -> f32 {
    (optical_depth(near, dir) - optical_depth(far, dir)).max(0.0)
}
