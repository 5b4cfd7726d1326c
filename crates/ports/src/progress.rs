// crates/ports/src/progress.rs
use batch_filesize_domain::ProgressTick;

/// Receives one tick per file, before the file is measured.
pub trait ProgressSink {
    fn on_file(&mut self, tick: ProgressTick);
}

/// Sink used when progress output is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn on_file(&mut self, _tick: ProgressTick) {}
}
