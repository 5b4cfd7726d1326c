// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use batch_filesize_domain::ScanConfig;
use batch_filesize_shared_kernel::{FilePath, FileSize, FsResult};

/// Input parameters controlling file discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryPlan {
    pub root: PathBuf,
    /// Case-sensitive file name suffix, dot included.
    pub extension: String,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub sort: bool,
}

impl From<&ScanConfig> for DiscoveryPlan {
    fn from(config: &ScanConfig) -> Self {
        Self {
            root: config.root.clone(),
            extension: config.extension.clone(),
            include_hidden: config.include_hidden,
            follow_links: config.follow_links,
            sort: config.sort,
        }
    }
}

/// Port for enumerating candidate files.
pub trait FileEnumerator {
    /// Every regular file under the plan's root whose name ends with the extension.
    fn discover(&self, plan: &DiscoveryPlan) -> FsResult<Vec<FilePath>>;
}

/// Port for reading a file's current size.
pub trait SizeProbe {
    fn size_of(&self, path: &FilePath) -> FsResult<FileSize>;
}
