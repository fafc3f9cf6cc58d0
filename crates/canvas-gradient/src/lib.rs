//! Canvas gradient crate.
//!
//! Models a canvas gradient object: an ordered list of color stops over a
//! linear, radial or conic parametrization, and the sampling function a
//! rasterizer uses to paint it.

pub mod coords;
pub mod host;
pub mod logging;
pub mod paint;
pub mod raster;

pub use paint::{CanvasGradient, GradientError, GradientKind, GradientSnapshot, Rgba};
