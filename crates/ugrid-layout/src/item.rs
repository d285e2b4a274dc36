#![forbid(unsafe_code)]

//! The host-side item contract.

use ugrid_core::geometry::{Rect, Size};

/// Visibility of a grid item.
///
/// Only [`Visibility::Collapsed`] removes an item from space-consuming layout.
/// A [`Visibility::Hidden`] item still occupies its cell; it just draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Occupies a cell but is not drawn.
    Hidden,
    /// Takes no cell and does not advance the layout cursor.
    Collapsed,
}

impl Visibility {
    /// Whether an item with this visibility consumes a grid cell.
    #[inline]
    pub const fn participates(self) -> bool {
        !matches!(self, Self::Collapsed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Collapsed => "collapsed",
        }
    }
}

/// A child laid out by a [`UniformGrid`](crate::UniformGrid).
///
/// The grid calls [`measure`](GridItem::measure) on every item during the
/// measure pass, reads [`desired_size`](GridItem::desired_size) right after,
/// and calls [`place`](GridItem::place) on every item during the arrange pass.
/// Collapsed items are measured and placed too; they simply never consume a
/// cell.
pub trait GridItem {
    /// Measure against the available cell size. Either axis may be infinite.
    fn measure(&mut self, available: Size);

    /// Size requested by the most recent [`measure`](GridItem::measure).
    fn desired_size(&self) -> Size;

    /// Current visibility. Defaults to [`Visibility::Visible`].
    fn visibility(&self) -> Visibility {
        Visibility::Visible
    }

    /// Accept the final rectangle for this item.
    fn place(&mut self, rect: Rect);

    /// Shorthand for `self.visibility().participates()`.
    #[inline]
    fn participates(&self) -> bool {
        self.visibility().participates()
    }
}

impl<T: GridItem + ?Sized> GridItem for &mut T {
    fn measure(&mut self, available: Size) {
        (**self).measure(available);
    }

    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn visibility(&self) -> Visibility {
        (**self).visibility()
    }

    fn place(&mut self, rect: Rect) {
        (**self).place(rect);
    }
}

impl<T: GridItem + ?Sized> GridItem for Box<T> {
    fn measure(&mut self, available: Size) {
        (**self).measure(available);
    }

    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn visibility(&self) -> Visibility {
        (**self).visibility()
    }

    fn place(&mut self, rect: Rect) {
        (**self).place(rect);
    }
}
