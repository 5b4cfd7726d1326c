// crates/shared-kernel/src/path.rs
use std::path::{Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
///
/// Only used for diagnostics; the pipeline itself keeps paths as the operator gave them.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
}
