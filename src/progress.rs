// src/progress.rs
/// Lightweight progress reporting for the collection run.
/// The CLI implements this to print per-subject status lines.
pub trait Progress {
    /// Called once the number of subject pages is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One subject view collected and merged.
    fn item_done(&mut self, _label: &str) {}

    /// One subject skipped (fetch or parse failed).
    fn item_failed(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
