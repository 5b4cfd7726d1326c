// crates/domain/src/model.rs
use std::fmt;

use batch_filesize_shared_kernel::{FilePath, FileSize, Uid};

use crate::naming::derive_uid;

/// First line of every report.
pub const REPORT_HEADER: &str = "uid,nBytes";

/// One measured file. Built once, written once, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: FilePath,
    uid: Uid,
    size: FileSize,
}

impl FileRecord {
    pub fn new(path: FilePath, size: FileSize) -> Self {
        let uid = derive_uid(&path);
        Self { path, uid, size }
    }

    pub fn path(&self) -> &FilePath {
        &self.path
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn size(&self) -> FileSize {
        self.size
    }
}

/// Progress marker printed before a file is measured: zero-based index and total, four digits each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTick {
    pub index: usize,
    pub total: usize,
}

impl fmt::Display for ProgressTick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}:{:04}", self.index, self.total)
    }
}

/// Counters of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub excluded: usize,
    pub written: usize,
    pub total_size: FileSize,
}

impl RunSummary {
    pub fn record(&mut self, record: &FileRecord) {
        self.written += 1;
        self.total_size = self.total_size.saturating_add(record.size());
    }
}
