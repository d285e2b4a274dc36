#![forbid(unsafe_code)]

//! Uniform grid layout.
//!
//! Arranges items into equally sized cells, left to right and top to bottom:
//!
//! - [`UniformGrid`] - grid panel state with the measure/arrange passes
//! - [`GridMeasure`] - a finished measure pass that can be arranged
//! - [`GridDimensions`] - effective rows, columns, and leading offset
//! - [`GridProperties`] - requested shape with validated setters
//! - [`GridItem`] - what the host implements for each child
//! - [`record`] - per-pass diagnostics
//!
//! # Shape inference
//!
//! Rows or columns left at 0 are derived from the number of items that take
//! up a cell (anything not [`Visibility::Collapsed`]). With neither given the
//! grid is the smallest square that fits; see [`dimensions`] for the rules.
//!
//! ```ignore
//! use ugrid_core::geometry::Size;
//! use ugrid_layout::UniformGrid;
//!
//! let mut grid = UniformGrid::new().columns(4);
//! let desired = grid.measure(&mut items, Size::new(400.0, f64::INFINITY));
//! grid.arrange(&mut items, desired);
//! ```

pub mod dimensions;
pub mod error;
pub mod grid;
pub mod invalidation;
pub mod item;
pub mod properties;
pub mod record;

pub use dimensions::GridDimensions;
pub use error::{GridError, GridProperty};
pub use grid::{GridMeasure, UniformGrid};
pub use invalidation::Invalidation;
pub use item::{GridItem, Visibility};
pub use properties::GridProperties;
pub use record::{ArrangeRecord, MeasureRecord, PassRecord, Placement};
pub use ugrid_core::geometry::{Rect, Size};
