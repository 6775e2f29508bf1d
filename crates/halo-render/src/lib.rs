//! Frame-level rendering on the CPU: a scanline worker pool that evaluates the
//! per-pixel atmosphere for every sample, the resulting image, and the sun
//! orbit that drives the sun direction over time.

mod error;
mod image;
mod orbit;
mod renderer;

pub use error::RenderError;
pub use image::FrameImage;
pub use orbit::SunOrbit;
pub use renderer::{CancelHandle, FrameRenderer};
