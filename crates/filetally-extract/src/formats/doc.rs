//! Legacy Word (`.doc`) page estimate.

use std::path::Path;

use filetally_core::ContentMetric;

use crate::dispatch::MetricExtractor;
use crate::error::ExtractError;

const FORM_FEED: u8 = 0x0c;

/// Estimates pages in a binary Word file as the number of form-feed bytes
/// plus one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocExtractor;

impl MetricExtractor for DocExtractor {
    fn extract(&self, path: &Path) -> Result<ContentMetric, ExtractError> {
        let data = std::fs::read(path).map_err(|e| ExtractError::io(path, e))?;
        Ok(ContentMetric::pages(count_pages(&data)))
    }
}

fn count_pages(data: &[u8]) -> u64 {
    data.iter().filter(|&&b| b == FORM_FEED).count() as u64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_pages() {
        assert_eq!(count_pages(b""), 1);
        assert_eq!(count_pages(b"one\x0ctwo\x0cthree"), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DocExtractor.extract(Path::new("/no/such/file.doc")).unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
    }
}
