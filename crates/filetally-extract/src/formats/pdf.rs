//! PDF page counts.

use std::path::Path;

use lopdf::Document;

use filetally_core::ContentMetric;

use crate::dispatch::MetricExtractor;
use crate::error::ExtractError;

/// Counts the pages in a PDF's page tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl MetricExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<ContentMetric, ExtractError> {
        let document = Document::load(path)?;
        Ok(ContentMetric::pages(document.get_pages().len() as u64))
    }
}
