//! ui
//!
//! User-facing output and diagnostics.
//!
//! # Modules
//!
//! - [`output`] - Status and error messages, value output
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Design
//!
//! Results (values, key lists, status lines) go to stdout. Errors and
//! log events go to stderr so piping `show` output stays clean.

pub mod logging;
pub mod output;
