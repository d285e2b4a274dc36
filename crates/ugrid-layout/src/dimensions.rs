#![forbid(unsafe_code)]

//! Effective grid dimensions and how they are inferred.
//!
//! # Inference
//!
//! Given requested `rows`/`columns` (0 = auto) and the number `V` of
//! participating items (an empty grid counts as `V = 1`):
//!
//! | rows | columns | effective shape                                         |
//! |------|---------|---------------------------------------------------------|
//! | 0    | 0       | square: `ceil(sqrt(V))` by `ceil(sqrt(V))`              |
//! | 0    | c       | `ceil((V + first_column) / c)` rows by `c`              |
//! | r    | 0       | `r` rows by `ceil(V / r)` (leading offset not counted)  |
//! | r    | c       | `r` by `c`                                              |
//!
//! The leading offset is reset to 0 whenever it does not fit inside the
//! effective column count. The check runs before inference when columns are
//! known up front and again after they are resolved.

use crate::properties::GridProperties;
use ugrid_core::geometry::{Rect, Size};

/// Rows, columns, and leading offset used by one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    rows: usize,
    columns: usize,
    first_column: usize,
}

impl GridDimensions {
    /// Explicit dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `columns` is zero; a grid always has at least one
    /// cell. An out-of-range `first_column` is normalized to 0.
    #[must_use]
    pub fn new(rows: usize, columns: usize, first_column: usize) -> Self {
        assert!(
            rows > 0 && columns > 0,
            "grid dimensions must be non-zero (rows={rows}, columns={columns})"
        );
        Self {
            rows,
            columns,
            first_column: if first_column < columns {
                first_column
            } else {
                0
            },
        }
    }

    /// Infer effective dimensions from the requested properties and the
    /// number of items that take up a cell.
    #[must_use]
    pub fn infer(props: &GridProperties, participating: usize) -> Self {
        let mut rows = props.rows;
        let mut columns = props.columns;
        let mut first_column = props.first_column;

        if columns > 0 && first_column >= columns {
            first_column = 0;
        }

        if rows == 0 || columns == 0 {
            let count = participating.max(1);
            if rows == 0 && columns == 0 {
                rows = square_side(count);
                columns = rows;
            } else if rows == 0 {
                rows = count
                    .saturating_add(first_column)
                    .saturating_add(columns - 1)
                    / columns;
            } else {
                columns = count.saturating_add(rows - 1) / rows;
            }
        }

        Self::new(rows, columns, first_column)
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Normalized leading offset; always `< columns()`.
    #[inline]
    pub const fn first_column(&self) -> usize {
        self.first_column
    }

    /// Total number of cells.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Size of one cell when the grid is given `area`.
    #[inline]
    pub fn cell_size(&self, area: Size) -> Size {
        Size::new(
            area.width / self.columns as f64,
            area.height / self.rows as f64,
        )
    }

    /// Row-major `(row, column)` of a cell slot.
    ///
    /// Slot 0 is the top-left cell. The `n`-th participating item (0-based)
    /// lands in slot `n + first_column()`.
    #[inline]
    pub const fn slot_position(&self, slot: usize) -> (usize, usize) {
        (slot / self.columns, slot % self.columns)
    }

    /// Rectangle of a cell slot within a grid of size `area`.
    ///
    /// Slots past [`capacity`](Self::capacity) continue below the last row.
    pub fn cell_rect(&self, slot: usize, area: Size) -> Rect {
        let cell = self.cell_size(area);
        let (row, col) = self.slot_position(slot);
        Rect::new(
            cell.width * col as f64,
            cell.height * row as f64,
            cell.width,
            cell.height,
        )
    }
}

/// Smallest `n` with `n * n >= count`.
fn square_side(count: usize) -> usize {
    let mut side = (count as f64).sqrt().ceil() as usize;
    // sqrt can land just under the true root for large counts
    if side.saturating_mul(side) < count {
        side += 1;
    }
    side.max(1)
}
