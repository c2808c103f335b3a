//! Progress reporting abstraction.
//!
//! External-tool invocations block until the child exits, so the pipeline
//! itself never busy-waits; it announces stage boundaries through this trait
//! and lets the caller decide how (or whether) to render them. The CLI backs
//! it with indicatif spinners; quiet mode and tests use [`NullReporter`].

/// Receives progress events from the pipeline.
///
/// All methods have empty defaults so implementors only override what they
/// render. Implementations must be cheap; they are called between blocking
/// external-tool invocations, never concurrently.
pub trait ProgressReporter {
    /// A new source file is about to be processed. `index` is zero-based.
    fn file_started(&self, _index: usize, _total: usize, _filename: &str) {}

    /// A long-running stage (probe, transcode, cover extraction) began.
    fn stage_started(&self, _message: &str) {}

    /// The current stage finished.
    fn stage_finished(&self, _message: &str) {}

    /// A chapter cut is starting. `current` is 1-based.
    fn chapter_started(&self, _current: usize, _total: usize, _title: &str) {}
}

/// Reporter that renders nothing. Used in quiet mode and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {}
