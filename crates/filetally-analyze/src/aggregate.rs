//! Bucket and histogram accumulation.

use std::collections::{BTreeMap, HashMap};

use compact_str::CompactString;
use indexmap::IndexMap;

use filetally_core::{
    AggregateBucket, AggregateKey, ExtensionTotals, GrandTotals, Observation, PageRangeHistogram,
    RunStats,
};

/// Owns every aggregate for one run.
///
/// Observations are folded in one at a time; nothing is ever removed or
/// decremented. Observations without a modification year only touch the
/// whole-run [`RunStats`].
#[derive(Debug, Default)]
pub struct Aggregator {
    buckets: HashMap<AggregateKey, AggregateBucket>,
    /// Per-extension histogram, in first-observed order.
    extension_histograms: IndexMap<CompactString, PageRangeHistogram>,
    stats: RunStats,
}

impl Aggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observation in. Returns `false` if it was dropped for lack
    /// of a modification year.
    pub fn accumulate(&mut self, observation: &Observation) -> bool {
        self.stats.record_file(observation.size);

        let Some(year) = observation.year else {
            self.stats.record_undated();
            tracing::warn!(
                path = %observation.path.display(),
                "dropping file without modification year"
            );
            return false;
        };

        let key = AggregateKey::new(observation.extension.clone(), year);
        self.buckets
            .entry(key)
            .or_default()
            .record(observation.size, &observation.metric);

        self.extension_histograms
            .entry(observation.extension.clone())
            .or_default()
            .record(observation.metric.pages);

        true
    }

    /// Note a file whose extractor failed.
    pub fn record_extraction_failure(&mut self) {
        self.stats.record_extraction_failure();
    }

    /// Note an entry the walker had to skip.
    pub fn record_walk_warning(&mut self) {
        self.stats.record_walk_warning();
    }

    /// All buckets, keyed by `(extension, year)`.
    pub fn buckets(&self) -> &HashMap<AggregateKey, AggregateBucket> {
        &self.buckets
    }

    /// Bucket for one key, if any observation landed in it.
    pub fn bucket(&self, extension: &str, year: i32) -> Option<&AggregateBucket> {
        self.buckets.get(&AggregateKey::new(extension, year))
    }

    /// Per-extension histograms in first-observed order.
    pub fn extension_histograms(&self) -> &IndexMap<CompactString, PageRangeHistogram> {
        &self.extension_histograms
    }

    /// Per-extension roll-up across years, keyed and ordered by extension.
    pub fn extension_totals(&self) -> BTreeMap<CompactString, ExtensionTotals> {
        let mut totals: BTreeMap<CompactString, ExtensionTotals> = BTreeMap::new();
        for (key, bucket) in &self.buckets {
            *totals.entry(key.extension.clone()).or_default() += bucket;
        }
        totals
    }

    /// Roll-up of every bucket.
    pub fn grand_totals(&self) -> GrandTotals {
        AggregateBucket::sum(self.buckets.values())
    }

    /// Whole-run counters.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Check if no observation made it into a bucket.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
