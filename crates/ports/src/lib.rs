//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory traversal and file size lookup
//! - [`progress`]: per-file progress reporting
//! - [`report`]: the CSV report destination
//!
//! These ports keep the report use case independent of the concrete
//! filesystem and output adapters.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod progress;
pub mod report;
