// src/app.rs
use batch_filesize_domain::{RunSummary, ScanConfig};
use batch_filesize_infra::{CsvReportTarget, MetadataSizeProbe, StdoutProgress, WalkEnumerator};
use batch_filesize_ports::{
    filesystem::DiscoveryPlan,
    progress::{ProgressSink, SilentProgress},
};
use batch_filesize_shared_kernel::{ErrorContext, Result, path::logical_absolute};
use batch_filesize_usecase::GenerateSizeReport;
use log::info;

/// Run one report with the real filesystem adapters.
pub fn run(config: &ScanConfig) -> Result<RunSummary> {
    let report_path = config.report_path();
    info!(
        "scanning {} for '{}' files, report: {}",
        logical_absolute(config.root()).display(),
        config.extension,
        logical_absolute(&report_path).display()
    );

    let enumerator = WalkEnumerator::new();
    let probe = MetadataSizeProbe::new();
    let target = CsvReportTarget::new(report_path);
    let mut progress: Box<dyn ProgressSink> =
        if config.quiet { Box::new(SilentProgress) } else { Box::new(StdoutProgress::stdout()) };

    let summary = GenerateSizeReport::new(&enumerator, &probe, &target)
        .run(&DiscoveryPlan::from(config), progress.as_mut())
        .context("size report aborted")?;

    info!(
        "wrote {} row(s), {:#} in total, to {}",
        summary.written,
        summary.total_size,
        target.path().display()
    );
    Ok(summary)
}
