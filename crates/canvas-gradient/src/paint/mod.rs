//! Paint model shared between the scripting boundary and renderers.
//!
//! Scope:
//! - color representation (straight-alpha RGBA8) and web color parsing
//! - color stop lists and their sampling function
//! - gradient descriptors (linear, radial, conic) and render snapshots
//!
//! Geometry types remain in `coords`; position-to-offset mapping lives in
//! `raster`.

pub mod color;
pub mod error;
pub mod gradient;
mod paint;
pub mod parse;
pub mod stops;

pub use color::Rgba;
pub use error::{ColorParseError, GradientError};
pub use gradient::{CanvasGradient, Circle, GradientGeometry, GradientKind, GradientSnapshot};
pub use paint::Paint;
pub use parse::parse_color;
pub use stops::{ColorStop, ColorStopList};
