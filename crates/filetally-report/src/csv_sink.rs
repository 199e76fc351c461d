//! Delimited file sink.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, Writer, WriterBuilder};

use crate::error::ReportError;
use crate::section::Report;

const LINE_END: u8 = b'\n';

impl Report {
    /// Write the report as CSV records.
    ///
    /// Each section is a label record, a header record, its rows and its
    /// totals record, followed by an empty line.
    pub fn write_csv<W: Write>(&self, mut out: W) -> Result<(), ReportError> {
        for section in self.sections() {
            let mut writer = section_writer(&mut out);
            writer.write_record([section.title.as_str()])?;
            writer.write_record(&section.header)?;
            for row in &section.rows {
                writer.write_record(row)?;
            }
            writer.write_record(&section.totals)?;
            writer.flush()?;
            drop(writer);

            // A zero-field record would come out as `""`.
            out.write_all(&[LINE_END])?;
        }

        out.flush()?;
        Ok(())
    }

    /// Write the report to `path`, replacing any existing file.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ReportError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_csv(file)?;
        tracing::debug!(path = %path.display(), "report written");
        Ok(())
    }

    /// The CSV output as a string.
    pub fn to_csv_string(&self) -> Result<String, ReportError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Flexible-width writer for one section.
fn section_writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(LINE_END))
        .from_writer(out)
}
