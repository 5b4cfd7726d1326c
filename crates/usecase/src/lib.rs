//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: discover, filter, measure and write the size report
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

// crates/usecase/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::GenerateSizeReport;
