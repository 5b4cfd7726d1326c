// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod progress;

pub use filesystem::{MetadataSizeProbe, WalkEnumerator};
pub use persistence::{CsvReportTarget, CsvReportWriter};
pub use progress::{StdoutProgress, WriterProgress};
