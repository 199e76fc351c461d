//! Spreadsheet row and column counts (`.xls`, `.xlsx`).

use std::path::Path;

use calamine::{Reader, open_workbook_auto};

use filetally_core::ContentMetric;

use crate::dispatch::MetricExtractor;
use crate::error::ExtractError;

/// Sums the used extent of every worksheet.
///
/// A sheet contributes its last used row and column (1-based), so leading
/// blank rows still count. Empty sheets contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetExtractor;

impl MetricExtractor for SheetExtractor {
    fn extract(&self, path: &Path) -> Result<ContentMetric, ExtractError> {
        let mut workbook = open_workbook_auto(path)?;
        let mut rows = 0u64;
        let mut columns = 0u64;

        for name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&name)?;
            if let Some((last_row, last_col)) = range.end() {
                rows += u64::from(last_row) + 1;
                columns += u64::from(last_col) + 1;
            }
        }

        Ok(ContentMetric::sheet(rows, columns))
    }
}
