// ---------------------------------------------------------------------------
// Progress reporting
// ---------------------------------------------------------------------------

/// Sink for "N of M done" updates emitted by long-running writes.
///
/// Purely observational: implementations cannot affect the operation's
/// outcome. Any `FnMut(usize, usize)` closure works as a sink.
pub trait ProgressSink {
    fn report(&mut self, done: usize, total: usize);
}

impl<F: FnMut(usize, usize)> ProgressSink for F {
    fn report(&mut self, done: usize, total: usize) {
        self(done, total)
    }
}

/// Sink that discards all updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _done: usize, _total: usize) {}
}

/// Sink that logs throttled `info`-level updates.
#[derive(Debug, Clone)]
pub struct LogProgress {
    label: String,
    every: usize,
}

impl LogProgress {
    /// Log one line per `every` rows, plus the final row.
    pub fn new(label: impl Into<String>, every: usize) -> Self {
        LogProgress {
            label: label.into(),
            every: every.max(1),
        }
    }
}

impl ProgressSink for LogProgress {
    fn report(&mut self, done: usize, total: usize) {
        if done % self.every == 0 || done == total {
            log::info!("{}: {done} of {total} rows", self.label);
        }
    }
}
