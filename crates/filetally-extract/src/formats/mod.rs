//! Built-in extractors, one per document family.

mod doc;
mod ooxml;
mod pdf;
mod ppt;
mod sheet;

pub use doc::DocExtractor;
pub use ooxml::{DocxExtractor, PptxExtractor};
pub use pdf::PdfExtractor;
pub use ppt::PptExtractor;
pub use sheet::SheetExtractor;
