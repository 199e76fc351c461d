//! Sink-independent report layout.

use strum::IntoEnumIterator;

use filetally_analyze::{AggregateBucket, ExtensionRow, PageRange, PageRangeHistogram, ReportViews};

/// Label in the first column of every totals row.
pub const TOTALS_LABEL: &str = "TOTALS";

const SUMMARY_TITLE: &str = "Summary Totals";
const HISTOGRAM_TITLE: &str = "Page Range Summary";

const FILE_TYPE: &str = "File Type";
const YEAR: &str = "Year";
const BUCKET_COLUMNS: [&str; 5] = [
    "Count",
    "Total Size (bytes)",
    "Total Pages",
    "Total Rows",
    "Total Columns",
];

/// One titled table: header, body rows and a totals row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub totals: Vec<String>,
}

impl ReportSection {
    /// Column index of the first numeric column.
    pub fn first_numeric_column(&self) -> usize {
        self.header
            .iter()
            .position(|h| h != FILE_TYPE && h != YEAR)
            .unwrap_or(self.header.len())
    }
}

/// A fully laid-out report, ready for any sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<ReportSection>,
}

impl Report {
    /// Lay out `views` in rendering order.
    pub fn from_views(views: &ReportViews) -> Self {
        let mut sections = Vec::with_capacity(views.years.len() + 2);

        sections.push(ReportSection {
            title: SUMMARY_TITLE.to_string(),
            header: bucket_header(false),
            rows: views
                .summary
                .rows
                .iter()
                .map(|row| bucket_cells(row, None))
                .collect(),
            totals: totals_cells(&views.summary.totals, None),
        });

        sections.push(ReportSection {
            title: HISTOGRAM_TITLE.to_string(),
            header: std::iter::once(FILE_TYPE.to_string())
                .chain(PageRange::iter().map(|r| r.to_string()))
                .collect(),
            rows: views
                .histogram
                .rows
                .iter()
                .map(|row| {
                    std::iter::once(row.extension.to_string())
                        .chain(histogram_cells(&row.histogram))
                        .collect()
                })
                .collect(),
            totals: std::iter::once(TOTALS_LABEL.to_string())
                .chain(histogram_cells(&views.histogram.totals))
                .collect(),
        });

        for section in &views.years {
            sections.push(ReportSection {
                title: format!("Year: {}", section.year),
                header: bucket_header(true),
                rows: section
                    .rows
                    .iter()
                    .map(|row| bucket_cells(row, Some(section.year)))
                    .collect(),
                totals: totals_cells(&section.totals, Some(section.year)),
            });
        }

        Self { sections }
    }

    /// Sections in rendering order.
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }
}

fn bucket_header(with_year: bool) -> Vec<String> {
    let mut header = vec![FILE_TYPE.to_string()];
    if with_year {
        header.push(YEAR.to_string());
    }
    header.extend(BUCKET_COLUMNS.iter().map(|c| c.to_string()));
    header.extend(PageRange::iter().map(|r| r.to_string()));
    header
}

fn bucket_cells(row: &ExtensionRow, year: Option<i32>) -> Vec<String> {
    labelled_cells(row.extension.as_str(), &row.totals, year)
}

fn totals_cells(totals: &AggregateBucket, year: Option<i32>) -> Vec<String> {
    labelled_cells(TOTALS_LABEL, totals, year)
}

fn labelled_cells(label: &str, bucket: &AggregateBucket, year: Option<i32>) -> Vec<String> {
    let mut cells = vec![label.to_string()];
    if let Some(year) = year {
        cells.push(year.to_string());
    }
    cells.extend(
        [
            bucket.count,
            bucket.total_size,
            bucket.total_pages,
            bucket.total_rows,
            bucket.total_columns,
        ]
        .iter()
        .map(u64::to_string),
    );
    cells.extend(histogram_cells(&bucket.histogram));
    cells
}

fn histogram_cells(histogram: &PageRangeHistogram) -> impl Iterator<Item = String> + '_ {
    PageRange::iter().map(|range| histogram.get(range).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetally_analyze::{Aggregator, ContentMetric, Observation};

    fn sample_views() -> ReportViews {
        let mut agg = Aggregator::new();
        for (name, year, size, pages) in [
            ("a.pdf", 2019, 100, 1),
            ("b.pdf", 2019, 200, 3),
            ("c.pdf", 2019, 300, 10),
            ("d.txt", 2021, 5, 0),
        ] {
            agg.accumulate(
                &Observation::new(name, size, None)
                    .with_year(Some(year))
                    .with_metric(ContentMetric::pages(pages)),
            );
        }
        ReportViews::build(&agg)
    }

    #[test]
    fn test_section_order_and_titles() {
        let report = Report::from_views(&sample_views());
        let titles: Vec<&str> = report.sections().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Summary Totals", "Page Range Summary", "Year: 2021", "Year: 2019"]
        );
    }

    #[test]
    fn test_row_widths_match_headers() {
        let report = Report::from_views(&sample_views());
        for section in report.sections() {
            for row in &section.rows {
                assert_eq!(row.len(), section.header.len(), "{}", section.title);
            }
            assert_eq!(section.totals.len(), section.header.len());
        }
        assert_eq!(report.sections()[0].header.len(), 9);
        assert_eq!(report.sections()[1].header.len(), 4);
        assert_eq!(report.sections()[2].header.len(), 10);
    }

    #[test]
    fn test_year_row_cells() {
        let report = Report::from_views(&sample_views());
        let year_2019 = &report.sections()[3];
        assert_eq!(
            year_2019.rows[0],
            vec!["pdf", "2019", "3", "600", "14", "0", "0", "1", "1", "1"]
        );
        assert_eq!(year_2019.totals[0], TOTALS_LABEL);
        assert_eq!(year_2019.totals[1], "2019");
        assert_eq!(year_2019.first_numeric_column(), 2);
    }

    #[test]
    fn test_histogram_header() {
        let report = Report::from_views(&sample_views());
        assert_eq!(
            report.sections()[1].header,
            vec!["File Type", "1-2 Pages", "3-5 Pages", "6+ Pages"]
        );
        assert_eq!(report.sections()[1].totals, vec!["TOTALS", "1", "1", "1"]);
    }
}
