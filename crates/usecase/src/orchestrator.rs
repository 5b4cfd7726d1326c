// crates/usecase/src/orchestrator.rs
use batch_filesize_domain::{FileRecord, ProgressTick, RunSummary, is_excluded};
use batch_filesize_ports::{
    filesystem::{DiscoveryPlan, FileEnumerator, SizeProbe},
    progress::ProgressSink,
    report::ReportTarget,
};
use batch_filesize_shared_kernel::{FilePath, FsResult};
use log::{debug, info};

/// Discover → filter → measure → write, strictly in that order and one file at a time.
///
/// The first filesystem failure aborts the run. Rows already handed to the sink
/// stay wherever the sink put them.
pub struct GenerateSizeReport<'a> {
    enumerator: &'a dyn FileEnumerator,
    probe: &'a dyn SizeProbe,
    target: &'a dyn ReportTarget,
}

impl<'a> GenerateSizeReport<'a> {
    pub fn new(
        enumerator: &'a dyn FileEnumerator,
        probe: &'a dyn SizeProbe,
        target: &'a dyn ReportTarget,
    ) -> Self {
        Self { enumerator, probe, target }
    }

    pub fn run(&self, plan: &DiscoveryPlan, progress: &mut dyn ProgressSink) -> FsResult<RunSummary> {
        let discovered = self.enumerator.discover(plan)?;
        let mut summary = RunSummary { discovered: discovered.len(), ..RunSummary::default() };

        let files = retain_reportable(discovered);
        summary.excluded = summary.discovered - files.len();
        info!(
            "discovered {} '{}' file(s) under {}, {} excluded",
            summary.discovered,
            plan.extension,
            plan.root.display(),
            summary.excluded
        );

        let mut sink = self.target.open()?;
        sink.write_header()?;

        let total = files.len();
        for (index, path) in files.into_iter().enumerate() {
            progress.on_file(ProgressTick { index, total });
            let size = self.probe.size_of(&path)?;
            let record = FileRecord::new(path, size);
            sink.write_record(&record)?;
            summary.record(&record);
        }

        sink.finish()?;
        Ok(summary)
    }
}

fn retain_reportable(paths: Vec<FilePath>) -> Vec<FilePath> {
    paths
        .into_iter()
        .filter(|path| {
            let excluded = is_excluded(&path.lossy());
            if excluded {
                debug!("excluded by marker: {}", path.display());
            }
            !excluded
        })
        .collect()
}
