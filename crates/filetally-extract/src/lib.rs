//! Content metric extraction for filetally.
//!
//! A [`MetricDispatcher`] maps lower-cased extensions to
//! [`MetricExtractor`]s. The default registry covers:
//!
//! | Extension | Metric |
//! |---|---|
//! | `pdf`, `doc`, `docx` | pages |
//! | `ppt`, `pptx` | slides (reported as pages) |
//! | `xls`, `xlsx` | rows and columns, summed over worksheets |
//!
//! Any other extension yields a zero metric without touching the file.
//! A failing extractor is logged and also yields zero; it never stops a run.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use filetally_extract::MetricDispatcher;
//!
//! let dispatcher = MetricDispatcher::new();
//! let metric = dispatcher.dispatch("pdf", Path::new("/docs/manual.pdf"));
//! println!("{} pages", metric.pages);
//! ```

mod dispatch;
mod error;
pub mod formats;

pub use dispatch::{Dispatch, MetricDispatcher, MetricExtractor};
pub use error::ExtractError;

pub use filetally_core::ContentMetric;
