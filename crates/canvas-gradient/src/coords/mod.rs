//! Coordinate types for gradient geometry.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are in radians and follow the same orientation, so a positive
//! angle turns clockwise on screen.

mod vec2;

pub use vec2::Vec2;
