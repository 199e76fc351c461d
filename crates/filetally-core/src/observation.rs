//! A single file visit and its content metric.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Datelike, Local};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Extension recorded for files without one.
pub const NO_EXTENSION: &str = "no_extension";

/// Format-specific content metric.
///
/// Documents fill `pages` (page or slide count), spreadsheets fill `rows`
/// and `columns`. Everything else stays zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetric {
    pub pages: u64,
    pub rows: u64,
    pub columns: u64,
}

impl ContentMetric {
    /// Metric for a paged document.
    pub fn pages(pages: u64) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    /// Metric for a spreadsheet.
    pub fn sheet(rows: u64, columns: u64) -> Self {
        Self {
            pages: 0,
            rows,
            columns,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// One scanned file, ready for aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Path of the file.
    pub path: PathBuf,
    /// Lower-cased extension without the dot, or [`NO_EXTENSION`].
    pub extension: CompactString,
    /// Size in bytes.
    pub size: u64,
    /// Calendar year of the last modification, if it could be read.
    pub year: Option<i32>,
    /// Content metric produced by the extractor for this extension.
    pub metric: ContentMetric,
}

impl Observation {
    /// Create an observation from walker output. The extension is derived
    /// from the path and the year from the modification time.
    pub fn new(path: impl Into<PathBuf>, size: u64, modified: Option<SystemTime>) -> Self {
        let path = path.into();
        Self {
            extension: extension_of(&path),
            size,
            year: modified.map(year_of),
            metric: ContentMetric::default(),
            path,
        }
    }

    /// Attach a content metric.
    pub fn with_metric(mut self, metric: ContentMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Override the year (used when observations are built by hand).
    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }
}

/// Lower-cased extension of `path` without the leading dot.
///
/// Files with no extension, an empty one (`"name."`) or only a leading dot
/// (`".bashrc"`) map to [`NO_EXTENSION`].
pub fn extension_of(path: &Path) -> CompactString {
    match path.extension().map(|ext| ext.to_string_lossy()) {
        Some(ext) if !ext.is_empty() => CompactString::new(ext.to_lowercase()),
        _ => CompactString::new(NO_EXTENSION),
    }
}

/// Calendar year of `time` in the local time zone.
pub fn year_of(time: SystemTime) -> i32 {
    DateTime::<Local>::from(time).year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(extension_of(Path::new("/a/Report.PDF")), "pdf");
        assert_eq!(extension_of(Path::new("archive.tar.GZ")), "gz");
    }

    #[test]
    fn test_missing_extension_uses_sentinel() {
        assert_eq!(extension_of(Path::new("/a/README")), NO_EXTENSION);
        assert_eq!(extension_of(Path::new("/a/.bashrc")), NO_EXTENSION);
        assert_eq!(extension_of(Path::new("/a/trailing.")), NO_EXTENSION);
    }

    #[test]
    fn test_year_of_mid_year() {
        // 2019-07-01T12:00:00Z, far enough from new year for any offset
        let time = UNIX_EPOCH + Duration::from_secs(1_561_982_400);
        assert_eq!(year_of(time), 2019);
    }

    #[test]
    fn test_observation_new() {
        let time = UNIX_EPOCH + Duration::from_secs(1_561_982_400);
        let obs = Observation::new("/docs/a.Docx", 42, Some(time));
        assert_eq!(obs.extension, "docx");
        assert_eq!(obs.size, 42);
        assert_eq!(obs.year, Some(2019));
        assert!(obs.metric.is_zero());

        let undated = Observation::new("/docs/b.docx", 1, None);
        assert_eq!(undated.year, None);
    }
}
