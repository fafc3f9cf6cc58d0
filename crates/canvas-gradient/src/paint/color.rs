use bytemuck::{Pod, Zeroable};

/// Straight-alpha sRGB color, 8 bits per channel.
///
/// This is the value a gradient hands to a rasterizer. The layout is
/// `#[repr(C)]` RGBA so pixel buffers can be viewed as bytes without copying.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Builds a color from straight `f64` components in `[0, 1]`.
    ///
    /// Out-of-range and NaN inputs are clamped; channels are rounded to nearest.
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), unit_to_u8(a))
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Per-channel linear interpolation, alpha included.
    ///
    /// Each channel is `a + (b - a) * t` evaluated in `f64` and truncated toward
    /// zero, so the midpoint of `0` and `255` is `127` in either direction.
    #[inline]
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        Rgba::new(
            lerp_channel(self.r, other.r, t),
            lerp_channel(self.g, other.g, t),
            lerp_channel(self.b, other.b, t),
            lerp_channel(self.a, other.a, t),
        )
    }
}

#[inline]
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    // `as` saturates and truncates.
    (a + (b - a) * t) as u8
}

#[inline]
fn unit_to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
