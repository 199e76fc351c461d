//! Console table sink.

use std::io::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};

use crate::error::ReportError;
use crate::section::{Report, ReportSection};

impl Report {
    /// Print every section as a titled table.
    pub fn render_console<W: Write>(&self, mut out: W) -> Result<(), ReportError> {
        for section in self.sections() {
            writeln!(out)?;
            writeln!(out, "{}", section.title)?;
            writeln!(out, "{}", section_table(section))?;
        }
        out.flush()?;
        Ok(())
    }

    /// All tables as one string.
    pub fn to_console_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render_console(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn section_table(section: &ReportSection) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(section.header.clone());

    for row in &section.rows {
        table.add_row(row.clone());
    }
    table.add_row(section.totals.clone());

    for index in section.first_numeric_column()..section.header.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}
