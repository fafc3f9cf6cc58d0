use crate::paint::Rgba;
use crate::paint::gradient::GradientSnapshot;

/// Paint source a rasterizer fills geometry with.
///
/// Mirrors a canvas fill/stroke style: either a plain color or a gradient.
/// Gradients are carried as snapshots so the paint can be moved to a render
/// thread while the owning context keeps adding stops.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Gradient(GradientSnapshot),
}

impl Paint {
    #[inline]
    pub fn solid(color: Rgba) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_opaque(),
            // Pixels outside a degenerate gradient's geometry stay unpainted,
            // so only the stop colors are considered here.
            Paint::Gradient(g) => g.is_opaque(),
        }
    }
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Paint::Solid(color)
    }
}

impl From<GradientSnapshot> for Paint {
    fn from(gradient: GradientSnapshot) -> Self {
        Paint::Gradient(gradient)
    }
}
