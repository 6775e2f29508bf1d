//! Per-pixel planetary atmosphere shading.
//!
//! Every pixel is an independent, allocation-free evaluation of
//! `(pixel coordinate, frame parameters) -> RGBA`:
//!
//! 1. [`camera`] turns the pixel into a world-space view ray.
//! 2. [`intersect`] clips that ray against the planet and the atmosphere shell.
//! 3. [`scatter`] integrates in-scattered sunlight along the shell segment,
//!    using the closed-form [`optical_depth`] estimator instead of a nested
//!    integral.
//! 4. [`surface`] shades the planet where the ray hits it.
//! 5. [`starfield`] fills otherwise empty sky with hashed stars.
//! 6. [`compose`] sums the three contributions.

pub mod camera;
pub mod compose;
pub mod constants;
pub mod density;
pub mod intersect;
pub mod optical_depth;
pub mod scatter;
pub mod starfield;
pub mod surface;

pub use camera::{CameraBasis, view_direction};
pub use compose::{FrameContext, FrameParams, PixelContributions, shade_pixel};
pub use constants::{ATM_RADIUS, DENSITY_FALLOFF, N_STEPS, SCATTERING_CONSTANT, WORLD_RADIUS};
pub use density::density_at;
pub use intersect::{RayHit, ray_sphere};
pub use optical_depth::{optical_depth, optical_depth_between};
pub use scatter::{DepthConvention, in_scatter, scatter_coefficients};
pub use starfield::{blackbody_to_rgb, starfield};
pub use surface::shade_surface;
