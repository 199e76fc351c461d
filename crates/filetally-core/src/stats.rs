//! Whole-run statistics.

use serde::{Deserialize, Serialize};

/// Counters over every file the walker produced, kept apart from the
/// aggregate buckets. Nothing here feeds a report table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Files seen, dated or not.
    pub files_seen: u64,
    /// Bytes seen, dated or not.
    pub bytes_seen: u64,
    /// Files dropped because their modification time could not be read.
    pub undated_files: u64,
    /// Files whose extractor failed.
    pub extraction_failures: u64,
    /// Entries skipped by the walker.
    pub walk_warnings: u64,
}

impl RunStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file coming out of the walker.
    pub fn record_file(&mut self, size: u64) {
        self.files_seen += 1;
        self.bytes_seen += size;
    }

    pub fn record_undated(&mut self) {
        self.undated_files += 1;
    }

    pub fn record_extraction_failure(&mut self) {
        self.extraction_failures += 1;
    }

    pub fn record_walk_warning(&mut self) {
        self.walk_warnings += 1;
    }

    /// Files that made it into the aggregates.
    pub fn dated_files(&self) -> u64 {
        self.files_seen - self.undated_files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stats_default() {
        let stats = RunStats::default();
        assert_eq!(stats.files_seen, 0);
        assert_eq!(stats.bytes_seen, 0);
        assert_eq!(stats.dated_files(), 0);
    }

    #[test]
    fn test_run_stats_record() {
        let mut stats = RunStats::new();
        stats.record_file(1024);
        stats.record_file(10);
        stats.record_undated();

        assert_eq!(stats.files_seen, 2);
        assert_eq!(stats.bytes_seen, 1034);
        assert_eq!(stats.dated_files(), 1);
    }
}
