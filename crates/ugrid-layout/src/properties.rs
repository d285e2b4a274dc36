#![forbid(unsafe_code)]

//! The three user-settable grid properties and their validation.
//!
//! Values are unsigned internally; zero `rows`/`columns` means "infer from the
//! number of participating items". Host bindings usually hand us signed
//! integers, so the validated setters take `i64` and reject negatives without
//! touching the stored value.

use crate::error::{GridError, GridProperty};

/// Environment variable providing a default row count.
pub const ENV_ROWS: &str = "UGRID_ROWS";
/// Environment variable providing a default column count.
pub const ENV_COLUMNS: &str = "UGRID_COLUMNS";
/// Environment variable providing a default leading offset.
pub const ENV_FIRST_COLUMN: &str = "UGRID_FIRST_COLUMN";

/// Requested grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridProperties {
    /// Requested rows; 0 = auto.
    pub rows: usize,
    /// Requested columns; 0 = auto.
    pub columns: usize,
    /// Empty cells before the first item in the first row.
    pub first_column: usize,
}

impl GridProperties {
    #[must_use]
    pub const fn new(rows: usize, columns: usize, first_column: usize) -> Self {
        Self {
            rows,
            columns,
            first_column,
        }
    }

    /// Read defaults from `UGRID_ROWS`, `UGRID_COLUMNS`, `UGRID_FIRST_COLUMN`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read defaults through a custom environment lookup (for tests).
    ///
    /// Missing, unparsable, and negative values leave the property at 0.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut props = Self::default();
        for (key, property) in [
            (ENV_ROWS, GridProperty::Rows),
            (ENV_COLUMNS, GridProperty::Columns),
            (ENV_FIRST_COLUMN, GridProperty::FirstColumn),
        ] {
            let Some(raw) = get_env(key) else {
                continue;
            };
            let Ok(value) = raw.trim().parse::<i64>() else {
                ugrid_core::warn!(key, raw = raw.as_str(), "ignoring unparsable grid override");
                continue;
            };
            if let Err(err) = props.set(property, value) {
                #[cfg(not(feature = "tracing"))]
                let _ = &err;
                ugrid_core::warn!(key, %err, "ignoring grid override");
            }
        }
        props
    }

    /// Current value of `property`.
    #[must_use]
    pub const fn get(&self, property: GridProperty) -> usize {
        match property {
            GridProperty::Rows => self.rows,
            GridProperty::Columns => self.columns,
            GridProperty::FirstColumn => self.first_column,
        }
    }

    /// Validate and store `value`.
    ///
    /// Returns `Ok(true)` if the stored value changed, `Ok(false)` if it was
    /// already equal. Negative values are rejected and nothing is modified.
    pub fn set(&mut self, property: GridProperty, value: i64) -> Result<bool, GridError> {
        let value =
            usize::try_from(value).map_err(|_| GridError::InvalidArgument { property, value })?;
        let slot = match property {
            GridProperty::Rows => &mut self.rows,
            GridProperty::Columns => &mut self.columns,
            GridProperty::FirstColumn => &mut self.first_column,
        };
        let changed = *slot != value;
        *slot = value;
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_is_fully_automatic() {
        assert_eq!(GridProperties::default(), GridProperties::new(0, 0, 0));
    }

    #[test]
    fn set_reports_change() {
        let mut props = GridProperties::default();
        assert_eq!(props.set(GridProperty::Rows, 3), Ok(true));
        assert_eq!(props.set(GridProperty::Rows, 3), Ok(false));
        assert_eq!(props.rows, 3);
    }

    #[test]
    fn negative_rejected_and_value_kept() {
        let mut props = GridProperties::new(0, 4, 1);
        for property in [
            GridProperty::Rows,
            GridProperty::Columns,
            GridProperty::FirstColumn,
        ] {
            let before = props.get(property);
            assert_eq!(
                props.set(property, -1),
                Err(GridError::InvalidArgument { property, value: -1 })
            );
            assert_eq!(props.get(property), before);
        }
        assert_eq!(props, GridProperties::new(0, 4, 1));
    }

    #[test]
    fn zero_is_accepted() {
        let mut props = GridProperties::new(2, 2, 1);
        assert_eq!(props.set(GridProperty::Columns, 0), Ok(true));
        assert_eq!(props.columns, 0);
    }

    #[test]
    fn env_overrides_applied() {
        let props = GridProperties::from_env_with(env(&[
            (ENV_ROWS, "2"),
            (ENV_COLUMNS, " 5 "),
            (ENV_FIRST_COLUMN, "1"),
        ]));
        assert_eq!(props, GridProperties::new(2, 5, 1));
    }

    #[test]
    fn env_bad_values_ignored() {
        let props = GridProperties::from_env_with(env(&[
            (ENV_ROWS, "-2"),
            (ENV_COLUMNS, "three"),
            (ENV_FIRST_COLUMN, "4"),
        ]));
        assert_eq!(props, GridProperties::new(0, 0, 4));
    }

    #[test]
    fn env_missing_is_default() {
        assert_eq!(
            GridProperties::from_env_with(|_| None),
            GridProperties::default()
        );
    }
}
