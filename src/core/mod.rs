//! core
//!
//! Secret document model, persistence, and operations.
//!
//! # Modules
//!
//! - [`document`] - The `Secret` manifest model, load and save
//! - [`errors`] - Error taxonomy shared by every operation
//! - [`source`] - Inline update sources (`-u` / `-U`)
//! - [`ops`] - create, show, update, delete, list keys
//! - [`config`] - Configuration resolved at the process boundary
//!
//! # Design Principles
//!
//! - One invocation, one file, one load → mutate → save cycle
//! - Operations return a typed result or a single error and never exit
//! - Secret values are never logged

pub mod config;
pub mod document;
pub mod errors;
pub mod ops;
pub mod source;
