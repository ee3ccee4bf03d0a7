//! Testing utilities for Tumble
//!
//! [`capture_logs`] records the diagnostics a closure emits through the `log`
//! facade; the assertion helpers work on sizes and render trees.

pub mod assertions;
pub mod logging;

pub use assertions::*;
pub use logging::*;
