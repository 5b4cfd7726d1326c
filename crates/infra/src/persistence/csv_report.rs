// crates/infra/src/persistence/csv_report.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use batch_filesize_domain::{FileRecord, REPORT_HEADER};
use batch_filesize_ports::report::{ReportSink, ReportTarget};
use batch_filesize_shared_kernel::{FilesystemError, FsResult};

use super::FileWriter;

/// Report destination on disk. The file is created (truncated) on [`ReportTarget::open`].
#[derive(Debug, Clone)]
pub struct CsvReportTarget {
    path: PathBuf,
}

impl CsvReportTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportTarget for CsvReportTarget {
    fn open(&self) -> FsResult<Box<dyn ReportSink>> {
        let out = FileWriter::create(&self.path)?;
        log::debug!("opened report {}", self.path.display());
        Ok(Box::new(CsvReportWriter::new(self.path.clone(), out)))
    }
}

/// Two-column CSV writer: `uid,nBytes` then one `uid,size` row per record.
///
/// Values are written as-is, without quoting. Rows sit in the buffer until it
/// fills or [`ReportSink::finish`] runs; dropping the writer early flushes on a
/// best-effort basis.
pub struct CsvReportWriter<W: Write = BufWriter<File>> {
    path: PathBuf,
    out: W,
}

impl<W: Write> CsvReportWriter<W> {
    pub fn new(path: PathBuf, out: W) -> Self {
        Self { path, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_error(&self, source: std::io::Error) -> FilesystemError {
        FilesystemError::Write { path: self.path.clone(), source }
    }
}

impl<W: Write> ReportSink for CsvReportWriter<W> {
    fn write_header(&mut self) -> FsResult<()> {
        writeln!(self.out, "{REPORT_HEADER}").map_err(|e| self.write_error(e))
    }

    fn write_record(&mut self, record: &FileRecord) -> FsResult<()> {
        writeln!(self.out, "{},{}", record.uid(), record.size()).map_err(|e| self.write_error(e))
    }

    fn finish(&mut self) -> FsResult<()> {
        FileWriter::flush(&mut self.out, &self.path)
    }
}
