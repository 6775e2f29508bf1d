//! Procedural starfield evaluated straight from the view direction.
//!
//! The unit sphere is scaled into an integer grid; each grid cell hashes to an
//! optional star with a jittered center, a brightness and a color temperature.
//! No catalog is kept: the same direction always yields the same star.

use glam::{IVec3, Vec3};

/// Grid cells per unit of direction.
const STAR_GRID_SCALE: f32 = 100.0;

/// Hash threshold above which a cell holds a star.
const STAR_PRESENCE: f32 = 0.82;

/// Radius of a star's disc, in grid cells.
const STAR_RADIUS: f32 = 0.35;

/// Coolest and hottest star temperatures in Kelvin.
const STAR_TEMPERATURE_RANGE: (f32, f32) = (2500.0, 12000.0);

const SALT_PRESENCE: u32 = 0;
const SALT_JITTER: [u32; 3] = [1, 2, 3];
const SALT_BRIGHTNESS: u32 = 4;
const SALT_TEMPERATURE: u32 = 5;

fn mix(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb_352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846c_a68b);
    x ^= x >> 16;
    x
}

/// Hash a grid cell and a salt into a well-mixed u32.
fn hash_cell(cell: IVec3, salt: u32) -> u32 {
    let mut h = salt ^ 0x9e37_79b9;
    h ^= (cell.x as u32).wrapping_mul(0x85eb_ca6b);
    h = mix(h);
    h ^= (cell.y as u32).wrapping_mul(0xc2b2_ae35);
    h = mix(h);
    h ^= (cell.z as u32).wrapping_mul(0x27d4_eb2f);
    mix(h)
}

/// Map a hash to `[0, 1)` using its top 24 bits.
fn hash_to_unit(hash: u32) -> f32 {
    (hash >> 8) as f32 / 16_777_216.0
}

/// Star light along `dir`, or zero when `existing` already holds any color.
///
/// `dir` must be normalized.
pub fn starfield(dir: Vec3, existing: Vec3) -> Vec3 {
    if existing != Vec3::ZERO {
        return Vec3::ZERO;
    }

    let scaled = dir * STAR_GRID_SCALE;
    let corner = scaled.floor();
    let cell = corner.as_ivec3();
    if hash_to_unit(hash_cell(cell, SALT_PRESENCE)) < STAR_PRESENCE {
        return Vec3::ZERO;
    }

    let jitter = Vec3::new(
        hash_to_unit(hash_cell(cell, SALT_JITTER[0])),
        hash_to_unit(hash_cell(cell, SALT_JITTER[1])),
        hash_to_unit(hash_cell(cell, SALT_JITTER[2])),
    );
    // Keep the whole disc inside its own cell.
    let center = corner + Vec3::splat(STAR_RADIUS) + jitter * (1.0 - 2.0 * STAR_RADIUS);
    let distance = scaled.distance(center);
    let falloff = (1.0 - distance / STAR_RADIUS).max(0.0);
    if falloff == 0.0 {
        return Vec3::ZERO;
    }

    // Power law: many faint stars, a few bright ones.
    let raw = hash_to_unit(hash_cell(cell, SALT_BRIGHTNESS));
    let brightness = 0.2 + 0.8 * raw * raw * raw;
    let (cool, hot) = STAR_TEMPERATURE_RANGE;
    let temperature = cool + (hot - cool) * hash_to_unit(hash_cell(cell, SALT_TEMPERATURE));

    Vec3::from(blackbody_to_rgb(temperature)) * (falloff * falloff * brightness)
}

/// Convert a blackbody temperature in Kelvin to an approximate sRGB color.
///
/// Uses a simplified Planckian locus approximation (Tanner Helland algorithm).
pub fn blackbody_to_rgb(temperature_k: f32) -> [f32; 3] {
    let t = temperature_k / 100.0;
    let r = if t <= 66.0 {
        1.0
    } else {
        (329.698_73 * (t - 60.0).powf(-0.133_204_76) / 255.0).clamp(0.0, 1.0)
    };
    let g = if t <= 66.0 {
        (99.470_8 * t.ln() - 161.119_57).clamp(0.0, 255.0) / 255.0
    } else {
        (288.122_17 * (t - 60.0).powf(-0.075_514_85) / 255.0).clamp(0.0, 1.0)
    };
    let b = if t >= 66.0 {
        1.0
    } else if t <= 19.0 {
        0.0
    } else {
        (138.517_73 * (t - 10.0).ln() - 305.044_8).clamp(0.0, 255.0) / 255.0
    };
    [r, g, b]
}
