//! Spreadsheet rendering.
//!
//! Writes a projection as a single-sheet workbook: header row first, then
//! one string row per projection row, every column the same width.

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::error::{LeaveError, LeaveResult};
use crate::reports::ReportProjection;

/// Excel's limit on sheet name length.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Excel's limit on columns per sheet.
pub const MAX_COLUMNS: usize = 16_384;

/// Renders a projection into `.xlsx` bytes.
///
/// The sheet is named after the projection title (see [`sheet_name`]).
pub fn render_spreadsheet(projection: &ReportProjection, column_width: f64) -> LeaveResult<Vec<u8>> {
    if projection.headers.len() > MAX_COLUMNS {
        return Err(LeaveError::Serialization {
            format: "Excel".to_string(),
            message: format!(
                "{} columns exceed the sheet limit of {MAX_COLUMNS}",
                projection.headers.len()
            ),
        });
    }

    build_workbook(projection, column_width).map_err(|e| LeaveError::Serialization {
        format: "Excel".to_string(),
        message: e.to_string(),
    })
}

fn build_workbook(projection: &ReportProjection, column_width: f64) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(&projection.title))?;

    let header_format = Format::new().set_bold();

    for (col, header) in projection.headers.iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, column_width)?;
        worksheet.write_string_with_format(0, col, header, &header_format)?;
    }

    for (row_idx, cells) in projection.body().iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        for (col, cell) in cells.iter().enumerate() {
            worksheet.write_string(excel_row, col as u16, cell)?;
        }
    }

    workbook.save_to_buffer()
}

/// Derives a valid sheet name from a report title.
///
/// Strips the characters Excel rejects (`[ ] : * ? / \`), trims leading and
/// trailing apostrophes and shortens the name to 31 characters, cutting at a
/// word boundary when one is available.
///
/// ```
/// use leave_desk::export::sheet_name;
///
/// assert_eq!(sheet_name("Leave Management Overview Report"), "Leave Management Overview");
/// assert_eq!(sheet_name("Q1/Q2 [draft]"), "Q1Q2 draft");
/// assert_eq!(sheet_name("???"), "Sheet1");
/// ```
pub fn sheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .collect();
    let cleaned = cleaned.trim().trim_matches('\'').trim();

    let name = if cleaned.chars().count() <= MAX_SHEET_NAME_LEN {
        cleaned.to_string()
    } else {
        let cut: String = cleaned.chars().take(MAX_SHEET_NAME_LEN).collect();
        let next = cleaned.chars().nth(MAX_SHEET_NAME_LEN);
        match (next, cut.rfind(' ')) {
            (Some(c), Some(space)) if !c.is_whitespace() => cut[..space].trim_end().to_string(),
            _ => cut.trim_end().to_string(),
        }
    };

    if name.is_empty() {
        "Sheet1".to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportRow;
    use std::io::{Cursor, Read};

    /// The parts of a written workbook the tests look at.
    struct Readback {
        workbook: String,
        sheet: String,
        shared: Vec<String>,
    }

    impl Readback {
        fn from_bytes(bytes: &[u8]) -> Self {
            let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
            let mut part = |name: &str| {
                let mut xml = String::new();
                archive.by_name(name).unwrap().read_to_string(&mut xml).unwrap();
                xml
            };

            let workbook = part("xl/workbook.xml");
            let sheet = part("xl/worksheets/sheet1.xml");
            let shared = part("xl/sharedStrings.xml")
                .split("<si>")
                .skip(1)
                .map(|si| {
                    let open = si.find("<t").unwrap();
                    let start = open + si[open..].find('>').unwrap() + 1;
                    si[start..si.find("</t>").unwrap()].to_string()
                })
                .collect();

            Self { workbook, sheet, shared }
        }

        /// Text of a cell such as `"B2"`; `None` when the cell holds nothing.
        fn cell(&self, reference: &str) -> Option<String> {
            let start = self.sheet.find(&format!("<c r=\"{reference}\""))?;
            let rest = &self.sheet[start..];
            let tag_end = rest.find('>')?;
            let tag = &rest[..tag_end];
            if tag.ends_with('/') {
                return None;
            }

            let body = &rest[tag_end + 1..rest.find("</c>")?];
            let value = body.strip_prefix("<v>")?.split("</v>").next()?;
            if tag.contains("t=\"s\"") {
                self.shared.get(value.parse::<usize>().ok()?).cloned()
            } else {
                Some(value.to_string())
            }
        }
    }

    fn projection(rows: Vec<ReportRow>) -> ReportProjection {
        ReportProjection {
            title: "Department-wise Leave Report".to_string(),
            filename: "department_leave_report".to_string(),
            headers: vec!["Department".to_string(), "Approved".to_string()],
            rows,
        }
    }

    #[test]
    fn test_render_spreadsheet_basic() {
        let bytes = render_spreadsheet(
            &projection(vec![
                ReportRow::new().with("Department", "Engineering").with("Approved", "3"),
                ReportRow::new().with("Department", "Operations").with("Approved", "0"),
            ]),
            15.0,
        )
        .unwrap();

        // XLSX files are zip archives
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_render_spreadsheet_header_only() {
        let bytes = render_spreadsheet(&projection(vec![]), 15.0).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_render_spreadsheet_missing_values() {
        let bytes = render_spreadsheet(
            &projection(vec![ReportRow::new().with("Department", "Finance")]),
            15.0,
        )
        .unwrap();

        let book = Readback::from_bytes(&bytes);
        assert_eq!(book.cell("A2").as_deref(), Some("Finance"));
        assert_eq!(book.cell("B2"), None);
    }

    #[test]
    fn test_render_spreadsheet_reads_back_header_then_rows() {
        let bytes = render_spreadsheet(
            &projection(vec![
                ReportRow::new().with("Department", "Engineering").with("Approved", "3"),
                ReportRow::new().with("Department", "Operations").with("Approved", "0"),
            ]),
            15.0,
        )
        .unwrap();

        let book = Readback::from_bytes(&bytes);
        assert!(book.workbook.contains(r#"name="Department-wise Leave Report""#));
        assert_eq!(book.cell("A1").as_deref(), Some("Department"));
        assert_eq!(book.cell("B1").as_deref(), Some("Approved"));
        assert_eq!(book.cell("A2").as_deref(), Some("Engineering"));
        assert_eq!(book.cell("B2").as_deref(), Some("3"));
        assert_eq!(book.cell("A3").as_deref(), Some("Operations"));
        assert_eq!(book.cell("B3").as_deref(), Some("0"));
        assert_eq!(book.cell("A4"), None);
        assert!(book.sheet.contains(r#"customWidth="1""#));
    }

    #[test]
    fn test_render_spreadsheet_long_title() {
        let mut long = projection(vec![]);
        long.title = "Leave Management Overview Report".to_string();

        let book = Readback::from_bytes(&render_spreadsheet(&long, 15.0).unwrap());
        assert!(book.workbook.contains(r#"name="Leave Management Overview""#));
        assert_eq!(book.cell("A1").as_deref(), Some("Department"));
    }

    #[test]
    fn test_sheet_name_short_titles_untouched() {
        assert_eq!(sheet_name("Leave Type Analysis Report"), "Leave Type Analysis Report");
        assert_eq!(sheet_name("Employee-wise Leave Report"), "Employee-wise Leave Report");
    }

    #[test]
    fn test_sheet_name_hard_cut_without_spaces() {
        let title = "x".repeat(40);
        assert_eq!(sheet_name(&title).len(), MAX_SHEET_NAME_LEN);
    }

    #[test]
    fn test_sheet_name_strips_apostrophes() {
        assert_eq!(sheet_name("'Quoted'"), "Quoted");
    }
}
