// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod uid;

pub use file_info::{FilePath, FileSize};
pub use uid::Uid;
