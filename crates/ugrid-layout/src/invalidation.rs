#![forbid(unsafe_code)]

//! Dirty tracking between layout passes.

use bitflags::bitflags;

bitflags! {
    /// Which layout passes must run again before the grid is up to date.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Invalidation: u8 {
        /// Dimensions and desired size are stale.
        const MEASURE = 0b01;
        /// Item rectangles are stale.
        const ARRANGE = 0b10;
        /// A property changed; both passes must run.
        const LAYOUT = Self::MEASURE.bits() | Self::ARRANGE.bits();
    }
}

impl Default for Invalidation {
    /// A fresh grid has never been laid out.
    fn default() -> Self {
        Self::LAYOUT
    }
}
