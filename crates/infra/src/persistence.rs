// crates/infra/src/persistence.rs
mod csv_report;
mod file_writer;

pub use csv_report::{CsvReportTarget, CsvReportWriter};
pub use file_writer::FileWriter;
