//! Report rendering for filetally.
//!
//! [`Report::from_views`] lays the grouped views out as a list of
//! [`ReportSection`]s: title, column header, rows and a closing totals
//! row, every cell already formatted. Both sinks print those cells
//! verbatim, so the console tables and the CSV file always carry the same
//! numbers.
//!
//! Section order is the summary, the page-range histogram, then one
//! section per year, most recent first.
//!
//! ```rust,ignore
//! use filetally_analyze::{ReportViews, Survey};
//! use filetally_report::Report;
//!
//! let aggregator = Survey::new().run(&config)?;
//! let report = Report::from_views(&ReportViews::build(&aggregator));
//! report.render_console(std::io::stdout().lock())?;
//! report.save_csv("output.csv")?;
//! ```

mod console;
mod csv_sink;
mod error;
mod section;

pub use error::ReportError;
pub use section::{Report, ReportSection, TOTALS_LABEL};

/// File written when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";
