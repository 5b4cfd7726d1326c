// crates/ports/src/report.rs
use batch_filesize_domain::FileRecord;
use batch_filesize_shared_kernel::FsResult;

/// Destination of the size report. Owns the output for the whole run.
pub trait ReportSink {
    fn write_header(&mut self) -> FsResult<()>;
    fn write_record(&mut self, record: &FileRecord) -> FsResult<()>;
    /// Flush everything written so far. Called once on the success path.
    fn finish(&mut self) -> FsResult<()>;
}

/// Opens the report destination. Called only after discovery succeeded.
pub trait ReportTarget {
    fn open(&self) -> FsResult<Box<dyn ReportSink>>;
}
