//! Position-to-offset mapping for each gradient geometry.
//!
//! Results are unclamped; sampling applies clamp-to-edge. `None` means the
//! point is not covered by the gradient and must be left unpainted.

use std::f64::consts::TAU;

use crate::coords::Vec2;
use crate::paint::{Circle, GradientGeometry};

/// Maps `point` onto the gradient's parametrization.
pub fn offset_at(geometry: &GradientGeometry, point: Vec2) -> Option<f64> {
    match *geometry {
        GradientGeometry::Linear { start, end } => linear_offset(start, end, point),
        GradientGeometry::Radial { start, end } => radial_offset(start, end, point),
        GradientGeometry::Conic { start_angle, center } => Some(conic_offset(start_angle, center, point)),
    }
}

/// Projection of `point` onto the gradient line, in units of the line length.
pub fn linear_offset(start: Vec2, end: Vec2, point: Vec2) -> Option<f64> {
    let dir = end - start;
    let len2 = dir.length_squared();
    if len2 == 0.0 || !len2.is_finite() {
        return None;
    }
    Some((point - start).dot(dir) / len2)
}

/// Two-point conical gradient.
///
/// Finds the largest `w` such that `point` lies on the circle interpolated
/// between `start` and `end` at `w`, with a non-negative interpolated radius.
///
/// A zero radius is accepted: the apex of a cone that starts from a point
/// (`r0 == 0`) is painted with the first stop instead of leaving a
/// one-pixel hole, as browser rasterizers do.
pub fn radial_offset(start: Circle, end: Circle, point: Vec2) -> Option<f64> {
    let dc = end.center - start.center;
    let dr = end.radius - start.radius;
    let dc2 = dc.length_squared();
    if dc2 == 0.0 && dr == 0.0 {
        return None;
    }

    let pd = point - start.center;
    let r0 = start.radius;
    let on_cone = |w: f64| w.is_finite() && r0 + w * dr >= 0.0;

    // |pd - w*dc|^2 = (r0 + w*dr)^2  =>  a*w^2 - 2*b*w + c = 0
    let a = dc2 - dr * dr;
    let b = pd.dot(dc) + r0 * dr;
    let c = pd.length_squared() - r0 * r0;

    // Focal point on the end circle: `a` is zero up to rounding in its inputs.
    if a.abs() <= 4.0 * f64::EPSILON * (dc2 + dr * dr) {
        if b == 0.0 {
            return None;
        }
        let w = c / (2.0 * b);
        return on_cone(w).then_some(w);
    }

    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let w0 = (b + root) / a;
    let w1 = (b - root) / a;
    let (hi, lo) = if w0 >= w1 { (w0, w1) } else { (w1, w0) };

    if on_cone(hi) {
        Some(hi)
    } else if on_cone(lo) {
        Some(lo)
    } else {
        None
    }
}

/// Fraction of a full turn from `start_angle` to `point`, in `[0, 1)`.
pub fn conic_offset(start_angle: f64, center: Vec2, point: Vec2) -> f64 {
    let d = point - center;
    let angle = d.y.atan2(d.x) - start_angle;
    let t = angle.rem_euclid(TAU) / TAU;
    // rem_euclid can round up to TAU for tiny negative inputs.
    if t >= 1.0 { 0.0 } else { t }
}
