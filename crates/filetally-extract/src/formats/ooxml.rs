//! Office Open XML packages (`.docx`, `.pptx`).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use filetally_core::ContentMetric;

use crate::dispatch::MetricExtractor;
use crate::error::ExtractError;

type Package = ZipArchive<BufReader<File>>;

/// Page count of a Word document.
///
/// Uses the `<Pages>` statistic the authoring application stores in
/// `docProps/app.xml`. Documents without it fall back to the number of
/// section properties in the main document part.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl MetricExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<ContentMetric, ExtractError> {
        let mut package = open_package(path)?;

        if let Some(app) = read_part(&mut package, "docProps/app.xml")? {
            if let Some(pages) = element_value(&app, "Pages").filter(|&p| p > 0) {
                return Ok(ContentMetric::pages(pages));
            }
        }

        let document = read_part(&mut package, "word/document.xml")?
            .ok_or_else(|| ExtractError::format("missing word/document.xml"))?;
        Ok(ContentMetric::pages(count_elements(&document, "w:sectPr")))
    }
}

/// Slide count of a PowerPoint presentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PptxExtractor;

impl MetricExtractor for PptxExtractor {
    fn extract(&self, path: &Path) -> Result<ContentMetric, ExtractError> {
        let package = open_package(path)?;
        let slides = package.file_names().filter(|name| is_slide_part(name)).count();
        Ok(ContentMetric::pages(slides as u64))
    }
}

fn open_package(path: &Path) -> Result<Package, ExtractError> {
    let file = File::open(path).map_err(|e| ExtractError::io(path, e))?;
    Ok(ZipArchive::new(BufReader::new(file))?)
}

/// Contents of a package part, or `None` if the part does not exist.
fn read_part(package: &mut Package, name: &str) -> Result<Option<String>, ExtractError> {
    let mut part = match package.by_name(name) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut contents = String::new();
    part.read_to_string(&mut contents)
        .map_err(|e| ExtractError::format(format!("{name}: {e}")))?;
    Ok(Some(contents))
}

/// Integer text of the first `<name>` element.
fn element_value(xml: &str, name: &str) -> Option<u64> {
    let open = format!("<{name}>");
    let close = format!("</{name}>");
    let start = xml.find(&open)? + open.len();
    let len = xml[start..].find(&close)?;
    xml[start..start + len].trim().parse().ok()
}

/// Number of `<name ...>` start (or empty) tags. Longer names sharing the
/// prefix, like `w:sectPrChange`, are not counted.
fn count_elements(xml: &str, name: &str) -> u64 {
    let tag = format!("<{name}");
    xml.match_indices(&tag)
        .filter(|(idx, _)| {
            matches!(
                xml[idx + tag.len()..].chars().next(),
                Some('>' | '/' | ' ' | '\t' | '\r' | '\n')
            )
        })
        .count() as u64
}

/// `ppt/slides/slideN.xml`, excluding layouts, masters and relationships.
fn is_slide_part(name: &str) -> bool {
    name.strip_prefix("ppt/slides/slide")
        .and_then(|rest| rest.strip_suffix(".xml"))
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}
