#![forbid(unsafe_code)]

//! Geometric primitives in device-independent layout units.
//!
//! Layout units are `f64`. A measurement constraint may be unbounded along
//! either axis, which is spelled `f64::INFINITY` (see [`Size::INFINITE`]).

/// A width/height pair.
///
/// Used for measurement constraints, desired sizes, and granted final sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// No limit on either axis.
    pub const INFINITE: Self = Self::new(f64::INFINITY, f64::INFINITY);

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Component-wise minimum.
    #[inline]
    #[must_use]
    pub fn min(self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }
}

/// An axis-aligned rectangle, origin at top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Size};

    #[test]
    fn size_max_min_componentwise() {
        let a = Size::new(10.0, 2.0);
        let b = Size::new(3.0, 8.0);
        assert_eq!(a.max(b), Size::new(10.0, 8.0));
        assert_eq!(a.min(b), Size::new(3.0, 2.0));
    }

    #[test]
    fn infinite_min_keeps_finite_axis() {
        let clamped = Size::new(40.0, 40.0).min(Size::new(f64::INFINITY, 10.0));
        assert_eq!(clamped, Size::new(40.0, 10.0));
        assert_eq!(Size::ZERO.max(Size::INFINITE), Size::INFINITE);
    }

    #[test]
    fn rect_new_sets_fields() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!((r.x, r.y, r.width, r.height), (10.0, 20.0, 30.0, 40.0));
        assert_eq!(Rect::default(), Rect::new(0.0, 0.0, 0.0, 0.0));
    }
}
