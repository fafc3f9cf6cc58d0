//! Scripting host boundary.
//!
//! A host environment (script engine, bindings layer) exposes gradients to
//! user code. It needs two things from this crate:
//! - a way to pick the behavior/prototype it attaches to an object
//!   ([`PlatformObject`])
//! - a shared handle whose failures map onto its own exception convention
//!   ([`GradientHandle`], [`HostException`])
//!
//! Handles are single-threaded (`Rc`). Anything crossing to a render thread
//! goes through [`GradientHandle::snapshot`].

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::paint::{CanvasGradient, GradientError, GradientKind, GradientSnapshot, Rgba};

/// Object a host can expose to scripts.
pub trait PlatformObject {
    /// Interface name the host keys its cached prototypes by.
    fn interface_name(&self) -> &'static str;
}

impl PlatformObject for CanvasGradient {
    fn interface_name(&self) -> &'static str {
        "CanvasGradient"
    }
}

/// Exception a host should raise, by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostException {
    pub name: &'static str,
    pub message: String,
}

impl From<GradientError> for HostException {
    fn from(err: GradientError) -> Self {
        Self {
            name: err.exception_name(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for HostException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

impl std::error::Error for HostException {}

/// Shared, reference-counted gradient handle.
///
/// Cloning shares the same gradient; it is dropped with the last handle.
/// Mutation borrows exclusively for the duration of the call only.
#[derive(Debug, Clone)]
pub struct GradientHandle {
    inner: Rc<RefCell<CanvasGradient>>,
}

impl GradientHandle {
    pub fn new(gradient: CanvasGradient) -> Self {
        Self {
            inner: Rc::new(RefCell::new(gradient)),
        }
    }

    pub fn create_linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(CanvasGradient::create_linear(x0, y0, x1, y1))
    }

    pub fn create_radial(x0: f64, y0: f64, r0: f64, x1: f64, y1: f64, r1: f64) -> Self {
        Self::new(CanvasGradient::create_radial(x0, y0, r0, x1, y1, r1))
    }

    pub fn create_conic(start_angle: f64, x: f64, y: f64) -> Self {
        Self::new(CanvasGradient::create_conic(start_angle, x, y))
    }

    pub fn add_color_stop(&self, offset: f64, color: &str) -> Result<(), HostException> {
        self.inner
            .borrow_mut()
            .add_color_stop(offset, color)
            .map_err(HostException::from)
    }

    pub fn kind(&self) -> GradientKind {
        self.inner.borrow().kind()
    }

    pub fn sample(&self, offset: f64) -> Rgba {
        self.inner.borrow().sample(offset)
    }

    pub fn snapshot(&self) -> GradientSnapshot {
        self.inner.borrow().snapshot()
    }

    /// Read access to the underlying gradient.
    pub fn gradient(&self) -> Ref<'_, CanvasGradient> {
        self.inner.borrow()
    }

    /// Returns true if both handles refer to the same gradient.
    pub fn ptr_eq(&self, other: &GradientHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to this gradient.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl PlatformObject for GradientHandle {
    fn interface_name(&self) -> &'static str {
        self.inner.borrow().interface_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interface_name_for_prototype_lookup() {
        let h = GradientHandle::create_conic(0.0, 1.0, 1.0);
        assert_eq!(h.interface_name(), "CanvasGradient");
    }

    #[test]
    fn clones_share_state() {
        let a = GradientHandle::create_linear(0.0, 0.0, 1.0, 0.0);
        let b = a.clone();
        b.add_color_stop(0.5, "red").unwrap();

        assert!(a.ptr_eq(&b));
        assert_eq!(a.holders(), 2);
        assert_eq!(a.gradient().stops().len(), 1);
        assert_eq!(a.sample(0.0), Rgba::opaque(255, 0, 0));

        drop(b);
        assert_eq!(a.holders(), 1);
    }

    #[test]
    fn errors_map_to_exception_names() {
        let h = GradientHandle::create_radial(0.0, 0.0, 1.0, 0.0, 0.0, 2.0);

        let e = h.add_color_stop(-0.01, "red").unwrap_err();
        assert_eq!(e.name, "IndexSizeError");

        let e = h.add_color_stop(0.3, "not-a-color").unwrap_err();
        assert_eq!(e.name, "SyntaxError");
        assert!(e.to_string().starts_with("SyntaxError: "));

        assert!(h.gradient().stops().is_empty());
    }

    #[test]
    fn snapshot_outlives_handle() {
        let h = GradientHandle::create_linear(0.0, 0.0, 1.0, 0.0);
        h.add_color_stop(0.0, "white").unwrap();
        let snap = h.snapshot();
        drop(h);
        assert_eq!(snap.kind(), GradientKind::Linear);
        assert_eq!(snap.sample(0.7), Rgba::WHITE);
    }
}
