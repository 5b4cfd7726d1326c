// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use batch_filesize_shared_kernel::{FilesystemError, FsResult};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create (or truncate) `path` and wrap it in a buffered writer.
    ///
    /// The parent directory is not created: a missing directory is reported as
    /// [`FilesystemError::Create`] and nothing is written.
    pub fn create<P: AsRef<Path>>(path: P) -> FsResult<BufWriter<File>> {
        let path = path.as_ref();
        File::create(path).map(BufWriter::new).map_err(|source| FilesystemError::Create {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Flush buffered bytes down to the file.
    pub fn flush<W: Write>(writer: &mut W, path: &Path) -> FsResult<()> {
        writer.flush().map_err(|source| FilesystemError::Write { path: path.to_path_buf(), source })
    }
}
