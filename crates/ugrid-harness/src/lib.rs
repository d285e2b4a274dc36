#![forbid(unsafe_code)]

//! Test host for the uniform grid.
//!
//! - [`TestItem`]: a [`GridItem`] that records what the grid asked of it.
//! - [`LayoutHost`]: runs a full measure + arrange pass the way a UI host would.
//! - [`grid_to_text`]: renders placements as a character grid for assertions.
//!
//! ```ignore
//! use ugrid_harness::{LayoutHost, TestItem, grid_to_text};
//!
//! let mut items = TestItem::labeled("ABC");
//! let mut host = LayoutHost::new(UniformGrid::new().columns(2));
//! let pass = host.layout(&mut items, Size::new(20.0, 20.0));
//! assert_eq!(grid_to_text(&items, pass.dimensions, pass.arranged), "AB\nC.");
//! ```

use ugrid_core::geometry::{Rect, Size};
use ugrid_layout::{GridDimensions, GridItem, UniformGrid, Visibility};

pub use ugrid_layout;

/// How a [`TestItem`] answers a measure call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    /// Always the same size, whatever is offered.
    Fixed(Size),
    /// Natural size clamped to the offered cell.
    Clamped(Size),
    /// Whatever is offered; falls back to the given size on unbounded axes.
    Fill(Size),
}

/// Recording grid item.
#[derive(Debug, Clone, PartialEq)]
pub struct TestItem {
    pub label: char,
    pub sizing: Sizing,
    pub visibility: Visibility,
    desired: Size,
    /// Every constraint offered, in call order.
    pub offered: Vec<Size>,
    /// Every rectangle placed, in call order.
    pub placed: Vec<Rect>,
}

impl TestItem {
    #[must_use]
    pub fn new(label: char, sizing: Sizing) -> Self {
        Self {
            label,
            sizing,
            visibility: Visibility::Visible,
            desired: Size::ZERO,
            offered: Vec::new(),
            placed: Vec::new(),
        }
    }

    /// Fixed-size item.
    #[must_use]
    pub fn fixed(label: char, width: f64, height: f64) -> Self {
        Self::new(label, Sizing::Fixed(Size::new(width, height)))
    }

    /// One 1x1 fixed item per character. `_` becomes a collapsed item.
    #[must_use]
    pub fn labeled(labels: &str) -> Vec<Self> {
        labels
            .chars()
            .map(|c| {
                let item = Self::fixed(c, 1.0, 1.0);
                if c == '_' { item.collapsed() } else { item }
            })
            .collect()
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn collapsed(self) -> Self {
        self.with_visibility(Visibility::Collapsed)
    }

    /// Most recent placement.
    pub fn rect(&self) -> Option<Rect> {
        self.placed.last().copied()
    }

    pub fn measure_calls(&self) -> usize {
        self.offered.len()
    }
}

impl GridItem for TestItem {
    fn measure(&mut self, available: Size) {
        self.offered.push(available);
        self.desired = match self.sizing {
            Sizing::Fixed(size) => size,
            Sizing::Clamped(size) => size.min(available),
            Sizing::Fill(fallback) => Size::new(
                if available.width.is_finite() {
                    available.width
                } else {
                    fallback.width
                },
                if available.height.is_finite() {
                    available.height
                } else {
                    fallback.height
                },
            ),
        };
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn place(&mut self, rect: Rect) {
        self.placed.push(rect);
    }
}

/// Outcome of one [`LayoutHost::layout`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostPass {
    pub desired: Size,
    /// Size granted to the arrange pass.
    pub arranged: Size,
    pub dimensions: GridDimensions,
}

/// Drives a grid through measure then arrange.
#[derive(Debug, Clone, Default)]
pub struct LayoutHost {
    pub grid: UniformGrid,
}

impl LayoutHost {
    #[must_use]
    pub fn new(grid: UniformGrid) -> Self {
        Self { grid }
    }

    /// Measure within `available`, then arrange.
    ///
    /// Finite axes of `available` are granted as-is; unbounded axes fall back
    /// to the desired size, the way a scrolling parent would.
    pub fn layout<T: GridItem>(&mut self, items: &mut [T], available: Size) -> HostPass {
        let desired = self.grid.measure(items, available);
        let arranged = Size::new(
            if available.width.is_finite() {
                available.width
            } else {
                desired.width
            },
            if available.height.is_finite() {
                available.height
            } else {
                desired.height
            },
        );
        self.grid.arrange(items, arranged);
        let dimensions = self
            .grid
            .dimensions()
            .unwrap_or_else(|| unreachable!("measure always records dimensions"));
        HostPass {
            desired,
            arranged,
            dimensions,
        }
    }
}

/// Render item placements as rows of characters.
///
/// Each cell shows the label of the participating item placed there, or `.`
/// when empty. Placements below the last row are dropped.
#[must_use]
pub fn grid_to_text(items: &[TestItem], dims: GridDimensions, area: Size) -> String {
    let cell = dims.cell_size(area);
    let mut rows = vec![vec!['.'; dims.columns()]; dims.rows()];

    for item in items.iter().filter(|item| item.visibility.participates()) {
        let Some(rect) = item.rect() else {
            continue;
        };
        let col = (rect.x / cell.width).round() as usize;
        let row = (rect.y / cell.height).round() as usize;
        if let Some(slot) = rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = item.label;
        }
    }

    rows.into_iter()
        .map(|r| r.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_marks_underscore_collapsed() {
        let items = TestItem::labeled("A_B");
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].visibility, Visibility::Collapsed);
        assert_eq!(items[2].label, 'B');
    }

    #[test]
    fn sizing_modes() {
        let offered = Size::new(5.0, f64::INFINITY);

        let mut fixed = TestItem::fixed('f', 9.0, 9.0);
        fixed.measure(offered);
        assert_eq!(fixed.desired_size(), Size::new(9.0, 9.0));

        let mut clamped = TestItem::new('c', Sizing::Clamped(Size::new(9.0, 9.0)));
        clamped.measure(offered);
        assert_eq!(clamped.desired_size(), Size::new(5.0, 9.0));

        let mut fill = TestItem::new('x', Sizing::Fill(Size::new(2.0, 3.0)));
        fill.measure(offered);
        assert_eq!(fill.desired_size(), Size::new(5.0, 3.0));
        assert_eq!(fill.measure_calls(), 1);
    }

    #[test]
    fn host_grants_desired_on_unbounded_axis() {
        let mut items = TestItem::labeled("ABCD");
        let mut host = LayoutHost::new(UniformGrid::new().columns(2));
        let pass = host.layout(&mut items, Size::new(40.0, f64::INFINITY));
        assert_eq!(pass.desired, Size::new(2.0, 2.0));
        assert_eq!(pass.arranged, Size::new(40.0, 2.0));
        assert_eq!(grid_to_text(&items, pass.dimensions, pass.arranged), "AB\nCD");
    }

    #[test]
    fn text_skips_collapsed_and_offset_cells() {
        let mut items = TestItem::labeled("A_BC");
        let mut host = LayoutHost::new(UniformGrid::new().columns(3).first_column(1));
        let pass = host.layout(&mut items, Size::new(30.0, 20.0));
        assert_eq!(grid_to_text(&items, pass.dimensions, pass.arranged), ".AB\nC..");
    }
}
