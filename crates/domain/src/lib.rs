// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;
pub mod naming;

pub use config::{ScanConfig, ScanConfigBuilder, ScanSettings};
pub use model::{FileRecord, ProgressTick, REPORT_HEADER, RunSummary};
pub use naming::{EXCLUDED_MARKER, derive_uid, is_excluded, marker_slice};
