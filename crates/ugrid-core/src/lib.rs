#![forbid(unsafe_code)]

//! Core: geometry in layout units, logging facade, and debug tracing.

pub mod debug_trace;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
