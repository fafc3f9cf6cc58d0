use crate::coords::Vec2;

use super::Rgba;
use super::error::{GradientError, Result};
use super::parse::parse_color;
use super::stops::{ColorStop, ColorStopList};

/// Geometric family of a gradient.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientKind {
    Linear,
    Radial,
    Conic,
}

/// A circle in logical pixels. The radius is stored as given, even if negative.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub const fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Geometry captured at construction.
///
/// Values are stored verbatim. Mapping a pixel position onto the gradient's
/// `[0, 1]` parametrization is done by [`crate::raster::offset_at`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientGeometry {
    /// Gradient line from `start` to `end`.
    Linear { start: Vec2, end: Vec2 },
    /// Cone between the `start` and `end` circles.
    Radial { start: Circle, end: Circle },
    /// Sweep around `center`, beginning at `start_angle` radians.
    Conic { start_angle: f64, center: Vec2 },
}

impl GradientGeometry {
    #[inline]
    pub fn kind(&self) -> GradientKind {
        match self {
            GradientGeometry::Linear { .. } => GradientKind::Linear,
            GradientGeometry::Radial { .. } => GradientKind::Radial,
            GradientGeometry::Conic { .. } => GradientKind::Conic,
        }
    }
}

/// A canvas gradient: geometry plus an ordered color stop list.
///
/// Construction never fails; all validation happens in
/// [`add_color_stop`](Self::add_color_stop).
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasGradient {
    geometry: GradientGeometry,
    stops: ColorStopList,
}

impl CanvasGradient {
    pub fn create_linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::with_geometry(GradientGeometry::Linear {
            start: Vec2::new(x0, y0),
            end: Vec2::new(x1, y1),
        })
    }

    pub fn create_radial(x0: f64, y0: f64, r0: f64, x1: f64, y1: f64, r1: f64) -> Self {
        Self::with_geometry(GradientGeometry::Radial {
            start: Circle::new(Vec2::new(x0, y0), r0),
            end: Circle::new(Vec2::new(x1, y1), r1),
        })
    }

    pub fn create_conic(start_angle: f64, x: f64, y: f64) -> Self {
        Self::with_geometry(GradientGeometry::Conic {
            start_angle,
            center: Vec2::new(x, y),
        })
    }

    pub fn with_geometry(geometry: GradientGeometry) -> Self {
        log::debug!("created {:?} gradient", geometry.kind());
        Self {
            geometry,
            stops: ColorStopList::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> GradientKind {
        self.geometry.kind()
    }

    #[inline]
    pub fn geometry(&self) -> &GradientGeometry {
        &self.geometry
    }

    #[inline]
    pub fn stops(&self) -> &ColorStopList {
        &self.stops
    }

    /// Places a new color stop.
    ///
    /// Fails with [`GradientError::IndexSize`] when `offset` is not within
    /// `[0, 1]` and with [`GradientError::Syntax`] when `color` does not parse.
    /// On failure the stop list is left untouched.
    pub fn add_color_stop(&mut self, offset: f64, color: &str) -> Result<()> {
        if !(0.0..=1.0).contains(&offset) {
            log::debug!("color stop rejected: offset {offset} out of bounds");
            return Err(GradientError::IndexSize { offset });
        }

        let color = parse_color(color).map_err(|err| {
            log::debug!("color stop rejected: {err}");
            GradientError::from(err)
        })?;

        self.stops.insert(ColorStop::new(offset, color));
        log::trace!("added color stop {offset} {color:?} ({} stops)", self.stops.len());
        Ok(())
    }

    /// Color at parametric position `offset`. See [`ColorStopList::sample`].
    #[inline]
    pub fn sample(&self, offset: f64) -> Rgba {
        self.stops.sample(offset)
    }

    /// Immutable view for a renderer.
    ///
    /// The snapshot shares stop storage with the gradient until the next
    /// `add_color_stop`, which then copies. It is `Send + Sync`.
    pub fn snapshot(&self) -> GradientSnapshot {
        log::trace!("snapshot of {:?} gradient with {} stops", self.kind(), self.stops.len());
        GradientSnapshot {
            geometry: self.geometry,
            stops: self.stops.clone(),
        }
    }
}

/// Frozen gradient state handed to a rasterizer.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSnapshot {
    geometry: GradientGeometry,
    stops: ColorStopList,
}

impl GradientSnapshot {
    #[inline]
    pub fn kind(&self) -> GradientKind {
        self.geometry.kind()
    }

    #[inline]
    pub fn geometry(&self) -> &GradientGeometry {
        &self.geometry
    }

    #[inline]
    pub fn stops(&self) -> &ColorStopList {
        &self.stops
    }

    #[inline]
    pub fn sample(&self, offset: f64) -> Rgba {
        self.stops.sample(offset)
    }

    /// Returns true when every stop is fully opaque (and there is at least one).
    pub fn is_opaque(&self) -> bool {
        !self.stops.is_empty() && self.stops.iter().all(|s| s.color.is_opaque())
    }
}
