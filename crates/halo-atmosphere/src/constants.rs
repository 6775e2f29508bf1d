//! Fixed scene constants shared by every stage of the pipeline.

use glam::Vec3;

/// Radius of the planet sphere, centered at the world origin.
pub const WORLD_RADIUS: f32 = 100.0;

/// Radius of the atmosphere shell, centered at the world origin.
pub const ATM_RADIUS: f32 = 120.0;

/// Exponential falloff of density across the atmosphere shell.
pub const DENSITY_FALLOFF: f32 = 7.0;

/// Overall scattering strength applied to the wavelength coefficients.
pub const SCATTERING_CONSTANT: f32 = 0.2;

/// Number of in-scattering samples along the view segment.
pub const N_STEPS: u32 = 10;

/// Inverse-wavelength proxies for red (700nm), green (530nm) and blue (440nm).
pub const WAVELENGTHS: Vec3 = Vec3::new(400.0 / 700.0, 400.0 / 530.0, 400.0 / 440.0);

/// Diffuse albedo of the planet surface.
pub const SURFACE_ALBEDO: Vec3 = Vec3::new(0.15, 0.28, 0.5);

/// Fixed world "up" used to build the camera basis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Secondary axis used when the camera looks along [`WORLD_UP`].
pub const FALLBACK_UP: Vec3 = Vec3::Z;

/// Radius of the tangent projection in the ray generator.
pub const PROJECTION_RADIUS: f32 = 0.5;

/// Blend from the linear mapping (0.0) toward the tangent mapping (1.0).
pub const PROJECTION_BLEND: f32 = 0.9;

const _: () = assert!(ATM_RADIUS > WORLD_RADIUS);
const _: () = assert!(N_STEPS > 1);
