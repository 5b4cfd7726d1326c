// crates/infra/src/filesystem.rs
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use batch_filesize_ports::filesystem::{DiscoveryPlan, FileEnumerator, SizeProbe};
use batch_filesize_shared_kernel::{FilePath, FileSize, FilesystemError, FsResult};
use ignore::{DirEntry, WalkBuilder};
use log::{debug, trace};

/// Sequential recursive walk implementing the `FileEnumerator` port.
///
/// Ignore files (`.gitignore`, `.ignore`, ...) are not consulted: every entry
/// under the root is a candidate. Dot-entries are skipped unless the plan asks
/// for them.
#[derive(Debug, Default)]
pub struct WalkEnumerator;

impl WalkEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl FileEnumerator for WalkEnumerator {
    fn discover(&self, plan: &DiscoveryPlan) -> FsResult<Vec<FilePath>> {
        ensure_root(&plan.root)?;

        let mut builder = WalkBuilder::new(&plan.root);
        // standard_filters resets hidden/ignore handling; it must run first.
        builder
            .standard_filters(false)
            .hidden(!plan.include_hidden)
            .follow_links(plan.follow_links);

        let mut found = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|err| traverse_error(&plan.root, err))?;
            if !is_regular_file(&entry) {
                continue;
            }
            if !entry.file_name().to_string_lossy().ends_with(plan.extension.as_str()) {
                continue;
            }
            trace!("matched {}", entry.path().display());
            found.push(FilePath::new(entry.into_path()));
        }

        if plan.sort {
            found.sort_unstable();
        }
        debug!("walk of {} yielded {} candidate(s)", plan.root.display(), found.len());
        Ok(found)
    }
}

fn ensure_root(root: &Path) -> FsResult<()> {
    let metadata = fs::metadata(root).map_err(|source| FilesystemError::RootInaccessible {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(FilesystemError::RootNotDirectory { path: root.to_path_buf() });
    }
    Ok(())
}

// The walker reports the target's type for followed links, so a symlink that
// shows up here was not followed and is not counted as a file.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file())
}

fn traverse_error(root: &Path, err: ignore::Error) -> FilesystemError {
    let path = error_path(&err).map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    let message = err.to_string();
    let source = err.into_io_error().unwrap_or_else(|| io::Error::other(message));
    FilesystemError::Traverse { path, source }
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

/// `SizeProbe` backed by `std::fs::metadata` (symlinks resolved).
#[derive(Debug, Default)]
pub struct MetadataSizeProbe;

impl MetadataSizeProbe {
    pub fn new() -> Self {
        Self
    }
}

impl SizeProbe for MetadataSizeProbe {
    fn size_of(&self, path: &FilePath) -> FsResult<FileSize> {
        fs::metadata(path.as_path())
            .map(|meta| FileSize::new(meta.len()))
            .map_err(|source| FilesystemError::Stat { path: PathBuf::from(path.as_path()), source })
    }
}
