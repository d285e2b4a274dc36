#![forbid(unsafe_code)]

//! Pass records for diagnostics and tests.
//!
//! A [`UniformGrid`](crate::UniformGrid) built with
//! [`recording`](crate::UniformGrid::recording) keeps one [`PassRecord`] per
//! measure or arrange call. Records serialize to single-line JSON, which is
//! also what `UGRID_DEBUG_TRACE=1` prints to stderr.

use crate::dimensions::GridDimensions;
use std::fmt::Write as _;
use ugrid_core::geometry::{Rect, Size};

/// Where one item was placed during an arrange pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Position of the item in the input sequence.
    pub index: usize,
    pub rect: Rect,
    /// Whether the item consumed its cell (false for collapsed items).
    pub advanced: bool,
}

/// Outcome of one measure pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureRecord {
    pub constraint: Size,
    pub dimensions: GridDimensions,
    /// Items that take up a cell.
    pub participating: usize,
    pub desired: Size,
}

/// Outcome of one arrange pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangeRecord {
    pub final_size: Size,
    pub dimensions: GridDimensions,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PassRecord {
    Measure(MeasureRecord),
    Arrange(ArrangeRecord),
}

impl PassRecord {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Measure(_) => "measure",
            Self::Arrange(_) => "arrange",
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> GridDimensions {
        match self {
            Self::Measure(m) => m.dimensions,
            Self::Arrange(a) => a.dimensions,
        }
    }

    /// Serialize to a single JSON object. Infinite sizes become `null`.
    #[must_use]
    pub fn to_json(&self) -> String {
        let dims = self.dimensions();
        let mut out = format!(
            r#"{{"pass":"{}","rows":{},"columns":{},"first_column":{}"#,
            self.kind(),
            dims.rows(),
            dims.columns(),
            dims.first_column()
        );
        match self {
            Self::Measure(m) => {
                let _ = write!(
                    out,
                    r#","constraint":{},"participating":{},"desired":{}"#,
                    size_json(m.constraint),
                    m.participating,
                    size_json(m.desired)
                );
            }
            Self::Arrange(a) => {
                let _ = write!(out, r#","final_size":{},"placements":["#, size_json(a.final_size));
                for (i, p) in a.placements.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    let _ = write!(
                        out,
                        r#"{{"index":{},"x":{},"y":{},"width":{},"height":{},"advanced":{}}}"#,
                        p.index,
                        num_json(p.rect.x),
                        num_json(p.rect.y),
                        num_json(p.rect.width),
                        num_json(p.rect.height),
                        p.advanced
                    );
                }
                out.push(']');
            }
        }
        out.push('}');
        out
    }
}

fn num_json(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        "null".to_owned()
    }
}

fn size_json(size: Size) -> String {
    format!(
        r#"{{"width":{},"height":{}}}"#,
        num_json(size.width),
        num_json(size.height)
    )
}
