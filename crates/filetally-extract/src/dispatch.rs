//! Extension-keyed extractor registry.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use compact_str::CompactString;

use filetally_core::ContentMetric;

use crate::error::ExtractError;
use crate::formats::{DocExtractor, DocxExtractor, PdfExtractor, PptExtractor, PptxExtractor, SheetExtractor};

/// Produces a content metric for one file.
pub trait MetricExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<ContentMetric, ExtractError>;
}

impl<F> MetricExtractor for F
where
    F: Fn(&Path) -> Result<ContentMetric, ExtractError> + Send + Sync,
{
    fn extract(&self, path: &Path) -> Result<ContentMetric, ExtractError> {
        self(path)
    }
}

/// Outcome of routing one file to its extractor.
#[derive(Debug)]
pub enum Dispatch {
    /// No extractor is registered for the extension.
    Unsupported,
    /// The extractor succeeded.
    Extracted(ContentMetric),
    /// The extractor failed.
    Failed(ExtractError),
}

impl Dispatch {
    /// Metric to aggregate: the extracted one, or zero.
    pub fn metric(&self) -> ContentMetric {
        match self {
            Self::Extracted(metric) => *metric,
            Self::Unsupported | Self::Failed(_) => ContentMetric::default(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Routes files to extractors by extension.
pub struct MetricDispatcher {
    extractors: HashMap<CompactString, Box<dyn MetricExtractor>>,
}

impl MetricDispatcher {
    /// Dispatcher with the built-in document and spreadsheet extractors.
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();
        dispatcher
            .register("pdf", PdfExtractor)
            .register("doc", DocExtractor)
            .register("docx", DocxExtractor)
            .register("ppt", PptExtractor)
            .register("pptx", PptxExtractor)
            .register("xls", SheetExtractor)
            .register("xlsx", SheetExtractor);
        dispatcher
    }

    /// Dispatcher with no extractors; every extension is unsupported.
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Register (or replace) the extractor for `extension`.
    pub fn register(
        &mut self,
        extension: impl Into<CompactString>,
        extractor: impl MetricExtractor + 'static,
    ) -> &mut Self {
        let extension: CompactString = extension.into();
        self.extractors
            .insert(CompactString::new(extension.to_lowercase()), Box::new(extractor));
        self
    }

    /// Check whether `extension` has an extractor.
    pub fn supports(&self, extension: &str) -> bool {
        self.extractors.contains_key(extension)
    }

    /// Extensions with a registered extractor, sorted.
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.extractors.keys().map(|k| k.as_str()).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Run the extractor for `extension` on `path`, reporting the outcome.
    pub fn try_dispatch(&self, extension: &str, path: &Path) -> Dispatch {
        let Some(extractor) = self.extractors.get(extension) else {
            return Dispatch::Unsupported;
        };

        match extractor.extract(path) {
            Ok(metric) => {
                tracing::debug!(path = %path.display(), ?metric, "extracted content metric");
                Dispatch::Extracted(metric)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "content metric extraction failed");
                Dispatch::Failed(err)
            }
        }
    }

    /// Metric for `path`; zero when unsupported or when extraction fails.
    pub fn dispatch(&self, extension: &str, path: &Path) -> ContentMetric {
        self.try_dispatch(extension, path).metric()
    }
}

impl Default for MetricDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MetricDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricDispatcher")
            .field("extensions", &self.extensions())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_default_registry() {
        let dispatcher = MetricDispatcher::new();
        assert_eq!(
            dispatcher.extensions(),
            vec!["doc", "docx", "pdf", "ppt", "pptx", "xls", "xlsx"]
        );
        assert!(!dispatcher.supports("txt"));
    }

    #[test]
    fn test_unsupported_does_not_call_anything() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let mut dispatcher = MetricDispatcher::empty();
        dispatcher.register("pdf", move |_: &Path| -> Result<ContentMetric, ExtractError> {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(ContentMetric::pages(1))
        });

        let outcome = dispatcher.try_dispatch("txt", Path::new("/a/notes.txt"));
        assert!(matches!(outcome, Dispatch::Unsupported));
        assert!(outcome.metric().is_zero());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_failure_maps_to_zero() {
        let mut dispatcher = MetricDispatcher::empty();
        dispatcher.register("pdf", |_: &Path| -> Result<ContentMetric, ExtractError> {
            Err(ExtractError::format("truncated xref"))
        });

        let outcome = dispatcher.try_dispatch("pdf", Path::new("/a/broken.pdf"));
        assert!(outcome.is_failure());
        assert!(outcome.metric().is_zero());
        assert!(dispatcher.dispatch("pdf", Path::new("/a/broken.pdf")).is_zero());
    }

    #[test]
    fn test_register_replaces_and_lowercases() {
        let mut dispatcher = MetricDispatcher::new();
        dispatcher.register("PDF", |_: &Path| -> Result<ContentMetric, ExtractError> {
            Ok(ContentMetric::pages(9))
        });

        assert_eq!(dispatcher.extensions().len(), 7);
        assert_eq!(dispatcher.dispatch("pdf", Path::new("x.pdf")).pages, 9);
    }
}
