//! Rasterizer boundary.
//!
//! A rasterizer owns the pixel loop, compositing and device color space.
//! This module only provides what it needs from a gradient:
//! - `offset_at`: screen position to gradient offset, per geometry kind
//! - `shade`: color of a paint at one position
//! - `fill_pixels`: reference CPU consumer sampling pixel centers
//!
//! Convention: logical pixels, top-left origin, +Y down. Pixel `(x, y)` is
//! sampled at its center `(x + 0.5, y + 0.5)`.

mod projection;

pub use projection::{conic_offset, linear_offset, offset_at, radial_offset};

use crate::coords::Vec2;
use crate::paint::{GradientSnapshot, Paint, Rgba};

/// Gradient color at `point`, or transparent where the gradient paints nothing.
pub fn shade_gradient(gradient: &GradientSnapshot, point: Vec2) -> Rgba {
    match offset_at(gradient.geometry(), point) {
        Some(t) => gradient.sample(t),
        None => Rgba::TRANSPARENT,
    }
}

/// Color of `paint` at `point`.
#[inline]
pub fn shade(paint: &Paint, point: Vec2) -> Rgba {
    match paint {
        Paint::Solid(c) => *c,
        Paint::Gradient(g) => shade_gradient(g, point),
    }
}

/// Shades a `width` x `height` buffer, row-major from the top-left pixel.
pub fn fill_pixels(paint: &Paint, width: u32, height: u32) -> Vec<Rgba> {
    log::trace!("filling {width}x{height} pixels");

    let mut out = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        let py = f64::from(y) + 0.5;
        for x in 0..width {
            out.push(shade(paint, Vec2::new(f64::from(x) + 0.5, py)));
        }
    }
    out
}

/// Byte view of a pixel buffer (RGBA8, row-major) for upload or encoding.
#[inline]
pub fn as_bytes(pixels: &[Rgba]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::CanvasGradient;

    fn black_to_white(mut g: CanvasGradient) -> GradientSnapshot {
        g.add_color_stop(0.0, "black").unwrap();
        g.add_color_stop(1.0, "white").unwrap();
        g.snapshot()
    }

    #[test]
    fn solid_paint_fills_everything() {
        let px = fill_pixels(&Paint::solid(Rgba::WHITE), 3, 2);
        assert_eq!(px.len(), 6);
        assert!(px.iter().all(|&c| c == Rgba::WHITE));
    }

    #[test]
    fn linear_fill_ramps_left_to_right() {
        let paint = Paint::from(black_to_white(CanvasGradient::create_linear(0.0, 0.0, 4.0, 0.0)));
        let px = fill_pixels(&paint, 4, 1);
        // Centers at 0.5, 1.5, 2.5, 3.5 -> t = 0.125 .. 0.875.
        assert_eq!(px[0], Rgba::new(31, 31, 31, 255));
        assert_eq!(px[3], Rgba::new(223, 223, 223, 255));
        assert!(px.windows(2).all(|w| w[0].r < w[1].r));
    }

    #[test]
    fn edges_clamp_beyond_gradient_line() {
        let g = black_to_white(CanvasGradient::create_linear(10.0, 0.0, 20.0, 0.0));
        assert_eq!(shade_gradient(&g, Vec2::new(0.0, 0.0)), Rgba::BLACK);
        assert_eq!(shade_gradient(&g, Vec2::new(99.0, 0.0)), Rgba::WHITE);
    }

    #[test]
    fn degenerate_gradient_is_transparent() {
        let g = black_to_white(CanvasGradient::create_linear(1.0, 1.0, 1.0, 1.0));
        assert_eq!(shade_gradient(&g, Vec2::new(1.0, 1.0)), Rgba::TRANSPARENT);
    }

    #[test]
    fn radial_center_takes_first_stop() {
        let g = black_to_white(CanvasGradient::create_radial(5.0, 5.0, 0.0, 5.0, 5.0, 5.0));
        assert_eq!(shade_gradient(&g, Vec2::new(5.0, 5.0)), Rgba::BLACK);
        assert_eq!(shade_gradient(&g, Vec2::new(50.0, 5.0)), Rgba::WHITE);
    }

    #[test]
    fn radial_focal_on_edge_is_not_clamped() {
        let k = 3.0 * 0.731;
        let (dx, dy) = (0.6 * k, 0.8 * k);
        let g = black_to_white(CanvasGradient::create_radial(0.0, 0.0, 0.0, dx, dy, dx.hypot(dy)));
        let c = shade_gradient(&g, Vec2::new(0.3 * dx + 1.0, 0.1 * dy));
        assert_eq!(c, Rgba::new(117, 117, 117, 255));
    }

    #[test]
    fn conic_half_turn_is_midpoint() {
        let g = black_to_white(CanvasGradient::create_conic(0.0, 0.0, 0.0));
        assert_eq!(shade_gradient(&g, Vec2::new(-3.0, 0.0)), Rgba::new(127, 127, 127, 255));
    }

    #[test]
    fn byte_view_matches_buffer() {
        let px = fill_pixels(&Paint::solid(Rgba::new(1, 2, 3, 4)), 2, 1);
        assert_eq!(as_bytes(&px), &[1, 2, 3, 4, 1, 2, 3, 4]);
    }
}
