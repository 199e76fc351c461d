//! Grouped and sorted report views.
//!
//! Every section carries its totals row, computed once here. Renderers
//! print it as-is so the console and the CSV file cannot disagree.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use compact_str::CompactString;
use itertools::Itertools;
use serde::Serialize;

use filetally_core::{AggregateBucket, GrandTotals, PageRangeHistogram};

use crate::aggregate::Aggregator;

/// One extension's figures within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionRow {
    pub extension: CompactString,
    pub totals: AggregateBucket,
}

/// Rows for a single modification year.
#[derive(Debug, Clone, Serialize)]
pub struct YearSection {
    pub year: i32,
    /// Sorted by count descending, then extension ascending.
    pub rows: Vec<ExtensionRow>,
    /// Field-wise sum of `rows`.
    pub totals: AggregateBucket,
}

/// Per-extension roll-up across all years.
#[derive(Debug, Clone, Serialize)]
pub struct SummarySection {
    /// Sorted by count descending, then extension ascending.
    pub rows: Vec<ExtensionRow>,
    pub totals: GrandTotals,
}

/// One extension's page-range histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramRow {
    pub extension: CompactString,
    pub histogram: PageRangeHistogram,
}

/// Page-range histogram per extension.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramSection {
    /// In first-observed extension order.
    pub rows: Vec<HistogramRow>,
    pub totals: PageRangeHistogram,
}

/// Everything a renderer needs, already ordered.
#[derive(Debug, Clone, Serialize)]
pub struct ReportViews {
    pub summary: SummarySection,
    pub histogram: HistogramSection,
    /// Most recent year first.
    pub years: Vec<YearSection>,
}

impl ReportViews {
    /// Build all views from a finished aggregation.
    pub fn build(aggregator: &Aggregator) -> Self {
        Self {
            summary: summary_section(aggregator),
            histogram: histogram_section(aggregator),
            years: year_sections(aggregator),
        }
    }

    /// Check if there is nothing to report.
    pub fn is_empty(&self) -> bool {
        self.summary.rows.is_empty()
    }
}

/// Count descending, extension ascending.
fn by_count_then_extension(a: &ExtensionRow, b: &ExtensionRow) -> Ordering {
    b.totals
        .count
        .cmp(&a.totals.count)
        .then_with(|| a.extension.cmp(&b.extension))
}

fn summary_section(aggregator: &Aggregator) -> SummarySection {
    let rows: Vec<ExtensionRow> = aggregator
        .extension_totals()
        .into_iter()
        .map(|(extension, totals)| ExtensionRow { extension, totals })
        .sorted_by(by_count_then_extension)
        .collect();
    let totals = AggregateBucket::sum(rows.iter().map(|r| &r.totals));

    SummarySection { rows, totals }
}

fn histogram_section(aggregator: &Aggregator) -> HistogramSection {
    let rows: Vec<HistogramRow> = aggregator
        .extension_histograms()
        .iter()
        .map(|(extension, histogram)| HistogramRow {
            extension: extension.clone(),
            histogram: *histogram,
        })
        .collect();

    let mut totals = PageRangeHistogram::new();
    for row in &rows {
        totals += &row.histogram;
    }

    HistogramSection { rows, totals }
}

fn year_sections(aggregator: &Aggregator) -> Vec<YearSection> {
    let mut by_year: BTreeMap<i32, Vec<ExtensionRow>> = BTreeMap::new();
    for (key, bucket) in aggregator.buckets() {
        by_year.entry(key.year).or_default().push(ExtensionRow {
            extension: key.extension.clone(),
            totals: *bucket,
        });
    }

    by_year
        .into_iter()
        .rev()
        .map(|(year, mut rows)| {
            rows.sort_by(by_count_then_extension);
            let totals = AggregateBucket::sum(rows.iter().map(|r| &r.totals));
            YearSection { year, rows, totals }
        })
        .collect()
}
