#![forbid(unsafe_code)]

//! Uniform grid: every participating item gets an equal-sized cell.
//!
//! Layout runs in two passes. [`UniformGrid::measure`] infers the effective
//! rows and columns from the item count, measures every item against one
//! cell, and reports the size the grid would like. [`UniformGrid::arrange`]
//! reuses those dimensions to hand each item its cell, left to right and top
//! to bottom, starting `first_column` cells into the first row.
//!
//! # Example
//!
//! ```ignore
//! use ugrid_core::geometry::Size;
//! use ugrid_layout::UniformGrid;
//!
//! let mut grid = UniformGrid::new().columns(3).first_column(1);
//! let desired = grid.measure(&mut items, Size::INFINITE);
//! grid.arrange(&mut items, Size::new(300.0, 200.0));
//! ```
//!
//! Callers that drive both passes themselves can use [`GridMeasure`]
//! directly; it cannot be arranged without having been measured.

use crate::dimensions::GridDimensions;
use crate::error::{GridError, GridProperty};
use crate::invalidation::Invalidation;
use crate::item::GridItem;
use crate::properties::GridProperties;
use crate::record::{ArrangeRecord, MeasureRecord, PassRecord, Placement};
use ugrid_core::geometry::{Rect, Size};

/// Result of a measure pass, ready to arrange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMeasure {
    dimensions: GridDimensions,
    participating: usize,
    desired: Size,
}

impl GridMeasure {
    /// Infer dimensions and measure every item, collapsed ones included.
    ///
    /// Each item is offered `constraint / (columns, rows)`. The grid's desired
    /// size is the largest desired item width and height, each scaled by the
    /// column and row count.
    pub fn run<T: GridItem>(props: &GridProperties, items: &mut [T], constraint: Size) -> Self {
        let participating = items.iter().filter(|item| item.participates()).count();
        let dimensions = GridDimensions::infer(props, participating);
        let cell = dimensions.cell_size(constraint);

        let mut largest = Size::ZERO;
        for item in items.iter_mut() {
            item.measure(cell);
            largest = largest.max(item.desired_size());
        }

        Self {
            dimensions,
            participating,
            desired: Size::new(
                largest.width * dimensions.columns() as f64,
                largest.height * dimensions.rows() as f64,
            ),
        }
    }

    #[inline]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Number of items that took up a cell when measured.
    #[inline]
    pub const fn participating(&self) -> usize {
        self.participating
    }

    /// Size the grid asked for.
    #[inline]
    pub const fn desired_size(&self) -> Size {
        self.desired
    }

    /// Place every item and return `final_size`.
    pub fn arrange<T: GridItem>(&self, items: &mut [T], final_size: Size) -> Size {
        self.arrange_with(items, final_size, |_| {})
    }

    /// Like [`arrange`](Self::arrange), reporting each placement to `observe`.
    ///
    /// Collapsed items are placed at the current cursor but do not move it,
    /// so the next participating item reuses the same cell.
    pub fn arrange_with<T, F>(&self, items: &mut [T], final_size: Size, mut observe: F) -> Size
    where
        T: GridItem,
        F: FnMut(Placement),
    {
        let cell = self.dimensions.cell_size(final_size);
        let mut cursor = Rect::new(0.0, 0.0, cell.width, cell.height);
        cursor.x += cell.width * self.dimensions.first_column() as f64;

        // Wrap one unit before the right edge.
        let right_edge = final_size.width - 1.0;

        for (index, item) in items.iter_mut().enumerate() {
            item.place(cursor);

            let advanced = item.participates();
            ugrid_core::trace!(
                index,
                x = cursor.x,
                y = cursor.y,
                advanced,
                "placed grid item"
            );
            observe(Placement {
                index,
                rect: cursor,
                advanced,
            });

            if advanced {
                cursor.x += cell.width;
                if cursor.x >= right_edge {
                    cursor.y += cell.height;
                    cursor.x = 0.0;
                }
            }
        }

        final_size
    }
}

/// Grid panel state carried between layout passes.
#[derive(Debug, Clone, Default)]
pub struct UniformGrid {
    props: GridProperties,
    measured: Option<GridMeasure>,
    dirty: Invalidation,
    records: Option<Vec<PassRecord>>,
}

impl UniformGrid {
    /// Fully automatic grid: square shape, no leading offset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid with the given properties.
    #[must_use]
    pub fn with_properties(props: GridProperties) -> Self {
        Self {
            props,
            ..Self::default()
        }
    }

    /// Set the requested row count (0 = auto).
    #[must_use]
    pub fn rows(mut self, rows: usize) -> Self {
        self.props.rows = rows;
        self
    }

    /// Set the requested column count (0 = auto).
    #[must_use]
    pub fn columns(mut self, columns: usize) -> Self {
        self.props.columns = columns;
        self
    }

    /// Set the number of empty cells before the first item.
    #[must_use]
    pub fn first_column(mut self, first_column: usize) -> Self {
        self.props.first_column = first_column;
        self
    }

    /// Keep a [`PassRecord`] for every measure and arrange call.
    #[must_use]
    pub fn recording(mut self) -> Self {
        self.records = Some(Vec::new());
        self
    }

    #[inline]
    pub fn properties(&self) -> &GridProperties {
        &self.props
    }

    /// Validated setter for host bindings.
    ///
    /// A negative value is rejected with [`GridError::InvalidArgument`] and the
    /// stored value stays as it was. Any accepted change invalidates layout.
    pub fn set(&mut self, property: GridProperty, value: i64) -> Result<(), GridError> {
        match self.props.set(property, value) {
            Ok(changed) => {
                if changed {
                    ugrid_core::debug!(%property, value, "grid property changed");
                    self.dirty |= Invalidation::LAYOUT;
                }
                Ok(())
            }
            Err(err) => {
                ugrid_core::warn!(%property, value, "rejected grid property");
                Err(err)
            }
        }
    }

    pub fn set_rows(&mut self, rows: i64) -> Result<(), GridError> {
        self.set(GridProperty::Rows, rows)
    }

    pub fn set_columns(&mut self, columns: i64) -> Result<(), GridError> {
        self.set(GridProperty::Columns, columns)
    }

    pub fn set_first_column(&mut self, first_column: i64) -> Result<(), GridError> {
        self.set(GridProperty::FirstColumn, first_column)
    }

    /// Mark both passes stale, e.g. after the host mutated the item list.
    pub fn invalidate(&mut self) {
        self.dirty |= Invalidation::LAYOUT;
    }

    #[inline]
    pub fn invalidation(&self) -> Invalidation {
        self.dirty
    }

    #[inline]
    pub fn needs_measure(&self) -> bool {
        self.dirty.contains(Invalidation::MEASURE)
    }

    #[inline]
    pub fn needs_arrange(&self) -> bool {
        self.dirty.contains(Invalidation::ARRANGE)
    }

    /// Dimensions from the most recent measure pass.
    #[inline]
    pub fn dimensions(&self) -> Option<GridDimensions> {
        self.measured.map(|m| m.dimensions())
    }

    /// Desired size from the most recent measure pass.
    #[inline]
    pub fn desired_size(&self) -> Option<Size> {
        self.measured.map(|m| m.desired_size())
    }

    /// Recorded passes, oldest first. Empty unless built with [`recording`](Self::recording).
    pub fn records(&self) -> &[PassRecord] {
        self.records.as_deref().unwrap_or(&[])
    }

    /// Drain recorded passes.
    pub fn take_records(&mut self) -> Vec<PassRecord> {
        self.records.as_mut().map(std::mem::take).unwrap_or_default()
    }

    /// Measure pass. Returns the size the grid would like within `constraint`.
    pub fn measure<T: GridItem>(&mut self, items: &mut [T], constraint: Size) -> Size {
        let _span = ugrid_core::debug_span!(
            "uniform_grid_measure",
            items = items.len(),
            width = constraint.width,
            height = constraint.height
        )
        .entered();

        let measured = GridMeasure::run(&self.props, items, constraint);
        let dims = measured.dimensions();
        ugrid_core::debug!(
            rows = dims.rows(),
            columns = dims.columns(),
            first_column = dims.first_column(),
            participating = measured.participating(),
            "grid dimensions inferred"
        );

        self.measured = Some(measured);
        self.dirty.remove(Invalidation::MEASURE);
        self.dirty |= Invalidation::ARRANGE;

        self.emit(|| {
            PassRecord::Measure(MeasureRecord {
                constraint,
                dimensions: dims,
                participating: measured.participating(),
                desired: measured.desired_size(),
            })
        });
        measured.desired_size()
    }

    /// Arrange pass. Places every item and returns `final_size`.
    ///
    /// Uses the dimensions from the latest [`measure`](Self::measure), even if
    /// properties or items changed since; call `measure` again first when
    /// [`needs_measure`](Self::needs_measure) reports stale dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the grid has never been measured.
    pub fn arrange<T: GridItem>(&mut self, items: &mut [T], final_size: Size) -> Size {
        let Some(measured) = self.measured else {
            panic!("UniformGrid::arrange called before measure");
        };

        let _span = ugrid_core::debug_span!(
            "uniform_grid_arrange",
            items = items.len(),
            width = final_size.width,
            height = final_size.height
        )
        .entered();

        let keep = self.records.is_some() || ugrid_core::debug_trace::is_enabled();
        let mut placements = Vec::new();
        let size = measured.arrange_with(items, final_size, |p| {
            if keep {
                placements.push(p);
            }
        });
        self.dirty.remove(Invalidation::ARRANGE);

        self.emit(|| {
            PassRecord::Arrange(ArrangeRecord {
                final_size,
                dimensions: measured.dimensions(),
                placements,
            })
        });
        size
    }

    fn emit(&mut self, build: impl FnOnce() -> PassRecord) {
        let trace = ugrid_core::debug_trace::is_enabled();
        if self.records.is_none() && !trace {
            return;
        }
        let record = build();
        ugrid_core::debug_trace!("{}", record.to_json());
        if let Some(records) = self.records.as_mut() {
            records.push(record);
        }
    }
}
