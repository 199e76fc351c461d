//! Aggregate buckets and page-range histograms.

use std::ops::AddAssign;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::observation::ContentMetric;

/// One of the three page-count ranges tracked by [`PageRangeHistogram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PageRange {
    /// 1 or 2 pages.
    #[strum(to_string = "1-2 Pages")]
    Low,
    /// 3 to 5 pages.
    #[strum(to_string = "3-5 Pages")]
    Mid,
    /// 6 or more pages.
    #[strum(to_string = "6+ Pages")]
    High,
}

impl PageRange {
    /// Range containing `pages`, or `None` for zero.
    pub fn classify(pages: u64) -> Option<Self> {
        match pages {
            0 => None,
            1..=2 => Some(Self::Low),
            3..=5 => Some(Self::Mid),
            _ => Some(Self::High),
        }
    }
}

/// Distribution of page counts over files with at least one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRangeHistogram {
    pub low: u64,
    pub mid: u64,
    pub high: u64,
}

impl PageRangeHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one file with `pages` pages. Zero-page files are not counted.
    pub fn record(&mut self, pages: u64) {
        if let Some(range) = PageRange::classify(pages) {
            *self.bin_mut(range) += 1;
        }
    }

    /// Number of files in `range`.
    pub fn get(&self, range: PageRange) -> u64 {
        match range {
            PageRange::Low => self.low,
            PageRange::Mid => self.mid,
            PageRange::High => self.high,
        }
    }

    fn bin_mut(&mut self, range: PageRange) -> &mut u64 {
        match range {
            PageRange::Low => &mut self.low,
            PageRange::Mid => &mut self.mid,
            PageRange::High => &mut self.high,
        }
    }

    /// Total files across all bins.
    pub fn total(&self) -> u64 {
        self.low + self.mid + self.high
    }
}

impl AddAssign<&PageRangeHistogram> for PageRangeHistogram {
    fn add_assign(&mut self, other: &PageRangeHistogram) {
        self.low += other.low;
        self.mid += other.mid;
        self.high += other.high;
    }
}

/// Key of one aggregate bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AggregateKey {
    pub extension: CompactString,
    pub year: i32,
}

impl AggregateKey {
    pub fn new(extension: impl Into<CompactString>, year: i32) -> Self {
        Self {
            extension: extension.into(),
            year,
        }
    }
}

/// Sums over every observation sharing one key.
///
/// The same shape is used for per-extension and grand roll-ups, which are
/// plain field-wise sums of buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateBucket {
    /// Number of files.
    pub count: u64,
    /// Total size in bytes.
    pub total_size: u64,
    /// Sum of page or slide counts.
    pub total_pages: u64,
    /// Sum of spreadsheet rows.
    pub total_rows: u64,
    /// Sum of spreadsheet columns.
    pub total_columns: u64,
    /// Page-range distribution of the files in this bucket.
    pub histogram: PageRangeHistogram,
}

/// Roll-up of every year for one extension.
pub type ExtensionTotals = AggregateBucket;

/// Roll-up of every extension.
pub type GrandTotals = AggregateBucket;

impl AggregateBucket {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one file.
    pub fn record(&mut self, size: u64, metric: &ContentMetric) {
        self.count += 1;
        self.total_size += size;
        self.total_pages += metric.pages;
        self.total_rows += metric.rows;
        self.total_columns += metric.columns;
        self.histogram.record(metric.pages);
    }

    /// Field-wise sum of `buckets`.
    pub fn sum<'a>(buckets: impl IntoIterator<Item = &'a AggregateBucket>) -> Self {
        let mut total = Self::new();
        for bucket in buckets {
            total += bucket;
        }
        total
    }
}

impl AddAssign<&AggregateBucket> for AggregateBucket {
    fn add_assign(&mut self, other: &AggregateBucket) {
        self.count += other.count;
        self.total_size += other.total_size;
        self.total_pages += other.total_pages;
        self.total_rows += other.total_rows;
        self.total_columns += other.total_columns;
        self.histogram += &other.histogram;
    }
}
