//! Core types for filetally.
//!
//! This crate provides the data model shared by every stage of a run:
//! observations coming out of the walker, the `(extension, year)` aggregate
//! buckets with their page-range histograms, whole-run statistics and the
//! scan configuration.

mod bucket;
mod config;
mod error;
mod observation;
mod stats;

pub use bucket::{AggregateBucket, AggregateKey, ExtensionTotals, GrandTotals, PageRange, PageRangeHistogram};
pub use config::{ScanConfig, ScanConfigBuilder};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use observation::{ContentMetric, NO_EXTENSION, Observation, extension_of, year_of};
pub use stats::RunStats;
