// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    BatchFilesizeError, ConfigError, ConfigResult, ErrorContext, FilesystemError, FsResult, Result,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{FilePath, FileSize, Uid};
