// crates/infra/src/progress.rs
use std::io::{self, Stdout, Write};

use batch_filesize_domain::ProgressTick;
use batch_filesize_ports::progress::ProgressSink;

/// Prints each tick on its own line.
///
/// Progress is informational: a failed write (closed pipe, full disk) is
/// dropped instead of aborting the run.
#[derive(Debug)]
pub struct WriterProgress<W: Write> {
    out: W,
}

pub type StdoutProgress = WriterProgress<Stdout>;

impl StdoutProgress {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressSink for WriterProgress<W> {
    fn on_file(&mut self, tick: ProgressTick) {
        let _ = writeln!(self.out, "{tick}").and_then(|()| self.out.flush());
    }
}
