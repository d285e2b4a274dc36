#![forbid(unsafe_code)]

//! Errors surfaced at the grid's property boundary.

use std::fmt;

/// One of the three user-settable grid properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridProperty {
    Rows,
    Columns,
    FirstColumn,
}

impl GridProperty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rows => "rows",
            Self::Columns => "columns",
            Self::FirstColumn => "first_column",
        }
    }
}

impl fmt::Display for GridProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recoverable grid errors.
///
/// Contract violations inside a layout pass (arranging before measuring, zero
/// effective dimensions) are not represented here; they panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A property was set to a negative value. The previous value is kept.
    InvalidArgument { property: GridProperty, value: i64 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { property, value } => {
                write!(f, "invalid {property}: {value} (must be >= 0)")
            }
        }
    }
}

impl std::error::Error for GridError {}
