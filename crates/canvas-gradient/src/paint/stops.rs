use std::sync::Arc;

use super::Rgba;

/// A single gradient stop.
///
/// Stops are immutable once placed on a list.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Ordered set of color stops.
///
/// Invariants:
/// - stops are sorted ascending by offset
/// - stops sharing an offset keep their insertion order
///
/// Storage is shared copy-on-write, so cloning the list (or taking a
/// gradient snapshot) never observes a later insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorStopList {
    stops: Arc<Vec<ColorStop>>,
}

impl ColorStopList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a stop after every existing stop whose offset is `<=` its own.
    ///
    /// Offsets are not validated here; `CanvasGradient::add_color_stop` owns
    /// the `[0, 1]` domain check.
    pub(crate) fn insert(&mut self, stop: ColorStop) {
        let at = self.stops.partition_point(|s| s.offset <= stop.offset);
        Arc::make_mut(&mut self.stops).insert(at, stop);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorStop> {
        self.stops.iter()
    }

    /// Color at parametric position `offset`.
    ///
    /// - no stops: [`Rgba::TRANSPARENT`]
    /// - before the first / after the last stop: that stop's color
    /// - between two stops: per-channel linear interpolation
    /// - at an offset shared by several stops: the last inserted one wins
    /// - NaN: treated as the start of the gradient
    pub fn sample(&self, offset: f64) -> Rgba {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Rgba::TRANSPARENT;
        };

        if offset.is_nan() {
            return first.color;
        }

        // Number of stops at or before `offset`.
        let idx = self.stops.partition_point(|s| s.offset <= offset);
        if idx == 0 {
            return first.color;
        }
        if idx == self.stops.len() {
            return last.color;
        }

        let lo = self.stops[idx - 1];
        let hi = self.stops[idx];
        // lo.offset <= offset < hi.offset, so the span is never zero.
        let t = (offset - lo.offset) / (hi.offset - lo.offset);
        lo.color.lerp(hi.color, t)
    }
}
