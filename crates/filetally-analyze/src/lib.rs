//! Aggregation and grouping for filetally.
//!
//! This crate turns a stream of observations into report-ready views:
//!
//! - **Aggregation** - [`Aggregator`] folds observations into
//!   `(extension, year)` buckets plus a per-extension page-range histogram
//! - **Grouping** - [`ReportViews`] orders buckets into a summary section,
//!   a histogram section and one section per year, each with its totals row
//! - **Survey** - [`Survey`] drives walker, metric dispatch and aggregation
//!   for one run
//!
//! ```rust,ignore
//! use filetally_analyze::{ReportViews, Survey};
//! use filetally_scan::ScanConfig;
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let aggregator = Survey::new().run(&config).unwrap();
//! let views = ReportViews::build(&aggregator);
//!
//! for row in &views.summary.rows {
//!     println!("{}: {} files", row.extension, row.totals.count);
//! }
//! ```

mod aggregate;
mod survey;
pub mod views;

pub use aggregate::Aggregator;
pub use survey::Survey;
pub use views::{
    ExtensionRow, HistogramRow, HistogramSection, ReportViews, SummarySection, YearSection,
};

// Re-export core types
pub use filetally_core::{
    AggregateBucket, AggregateKey, ContentMetric, ExtensionTotals, GrandTotals, Observation,
    PageRange, PageRangeHistogram, RunStats,
};
