//! Per-route authentication.
//!
//! Each route group declares the scheme names it accepts; only those schemes run.

mod dispatch;

pub use dispatch::require;
