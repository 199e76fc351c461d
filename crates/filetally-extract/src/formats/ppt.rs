//! Legacy PowerPoint (`.ppt`) slide counts.

use std::io::{ErrorKind, Read};
use std::path::Path;

use filetally_core::ContentMetric;

use crate::dispatch::MetricExtractor;
use crate::error::ExtractError;

const DOCUMENT_STREAM: &str = "/PowerPoint Document";
const RECORD_HEADER_LEN: usize = 8;
const RT_DOCUMENT: u16 = 0x03e8;
const RT_SLIDE: u16 = 0x03ee;

/// Counts slide containers in the `PowerPoint Document` stream of a
/// compound file.
///
/// Files saved with fast-save may keep superseded slide records, so the
/// count is an upper bound for those.
#[derive(Debug, Clone, Copy, Default)]
pub struct PptExtractor;

impl MetricExtractor for PptExtractor {
    fn extract(&self, path: &Path) -> Result<ContentMetric, ExtractError> {
        let mut compound = cfb::open(path).map_err(|e| match e.kind() {
            ErrorKind::InvalidData | ErrorKind::UnexpectedEof => {
                ExtractError::format(format!("not a compound file: {e}"))
            }
            _ => ExtractError::io(path, e),
        })?;
        let mut stream = compound
            .open_stream(DOCUMENT_STREAM)
            .map_err(|e| ExtractError::format(format!("{DOCUMENT_STREAM}: {e}")))?;

        let mut data = Vec::new();
        stream
            .read_to_end(&mut data)
            .map_err(|e| ExtractError::io(path, e))?;

        count_slides(&data).map(ContentMetric::pages)
    }
}

/// Walks the top-level records and counts the slide containers.
fn count_slides(data: &[u8]) -> Result<u64, ExtractError> {
    let mut offset = 0;
    let mut slides = 0;
    let mut saw_document = false;

    while offset + RECORD_HEADER_LEN <= data.len() {
        let rec_type = u16::from_le_bytes([data[offset + 2], data[offset + 3]]);
        let rec_len = u32::from_le_bytes([
            data[offset + 4],
            data[offset + 5],
            data[offset + 6],
            data[offset + 7],
        ]) as usize;

        match rec_type {
            RT_DOCUMENT => saw_document = true,
            RT_SLIDE => slides += 1,
            _ => {}
        }

        offset = offset
            .saturating_add(RECORD_HEADER_LEN)
            .saturating_add(rec_len);
    }

    if !saw_document {
        return Err(ExtractError::format("no DocumentContainer record"));
    }
    Ok(slides)
}
