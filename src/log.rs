//! Logging shims for the render path.
//!
//! With the `tracing` feature these are the `tracing` macros. Without it every
//! macro swallows its arguments, so per-tick renders cost nothing in release
//! builds of hosts that don't collect logs.
//!
//! Levels in use: `trace` for paint-only updates (once per host refresh),
//! `debug` for overlay rebuilds and degraded parses, `warn` for options that
//! had to be replaced by defaults.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __bp_trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __bp_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __bp_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{__bp_debug as debug, __bp_trace as trace, __bp_warn as warn};
