#![forbid(unsafe_code)]

//! Core: clip geometry, cursor descriptors, and the logging facade shared by
//! the glyphgrid crates.

pub mod cursor;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, info_span, trace, trace_span, warn};
