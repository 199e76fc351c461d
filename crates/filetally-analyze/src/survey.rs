//! One survey run: walk, dispatch, aggregate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use filetally_core::{Observation, ScanConfig, ScanError};
use filetally_extract::MetricDispatcher;
use filetally_scan::{FileEntry, FileWalker, ProgressTracker, ScanProgress};

use crate::aggregate::Aggregator;

/// Drives the walker, metric dispatch and aggregation for one run.
///
/// Each file is fully dispatched and folded in before the next one is read.
/// The optional cancel flag is checked between files, so an interrupted run
/// never leaves a half-updated bucket behind.
#[derive(Debug, Default)]
pub struct Survey {
    dispatcher: MetricDispatcher,
    walker: FileWalker,
    cancel: Option<Arc<AtomicBool>>,
}

impl Survey {
    /// Create a survey with the built-in extractors.
    pub fn new() -> Self {
        Self::with_dispatcher(MetricDispatcher::new())
    }

    /// Create a survey with a custom dispatcher.
    pub fn with_dispatcher(dispatcher: MetricDispatcher) -> Self {
        Self {
            dispatcher,
            walker: FileWalker::new(),
            cancel: None,
        }
    }

    /// Stop the run with [`ScanError::Interrupted`] once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Run without progress reporting.
    pub fn run(&self, config: &ScanConfig) -> Result<Aggregator, ScanError> {
        self.run_with_progress(config, |_| {})
    }

    /// Run, calling `on_progress` after every file.
    pub fn run_with_progress<F>(
        &self,
        config: &ScanConfig,
        mut on_progress: F,
    ) -> Result<Aggregator, ScanError>
    where
        F: FnMut(&ScanProgress),
    {
        let walk = self.walker.walk(config)?;
        tracing::debug!(root = %walk.root().display(), "survey started");

        let mut aggregator = Aggregator::new();
        let mut tracker = ProgressTracker::new();

        for item in walk {
            if self.is_cancelled() {
                tracing::debug!(files = tracker.snapshot().files_scanned, "survey interrupted");
                return Err(ScanError::Interrupted);
            }

            match item {
                Ok(entry) => {
                    tracker.record_file(&entry.path, entry.size);
                    if !self.observe(entry, &mut aggregator) {
                        tracker.record_error();
                    }
                }
                Err(warning) => {
                    tracing::warn!(path = %warning.path.display(), kind = ?warning.kind, "{}", warning.message);
                    aggregator.record_walk_warning();
                    tracker.record_error();
                }
            }

            on_progress(&tracker.snapshot());
        }

        Ok(aggregator)
    }

    /// Dispatch and fold in one file. Returns `false` if the extractor
    /// failed or the file was dropped for lack of a modification time.
    pub fn observe(&self, entry: FileEntry, aggregator: &mut Aggregator) -> bool {
        let observation = Observation::new(entry.path, entry.size, entry.modified);

        // Undated files never reach a bucket, so their content is not read.
        if observation.year.is_none() {
            aggregator.accumulate(&observation);
            return false;
        }

        let outcome = self
            .dispatcher
            .try_dispatch(&observation.extension, &observation.path);
        let failed = outcome.is_failure();
        if failed {
            aggregator.record_extraction_failure();
        }

        aggregator.accumulate(&observation.with_metric(outcome.metric()));
        !failed
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
