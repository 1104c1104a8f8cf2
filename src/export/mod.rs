//! Report export for leave-desk.
//!
//! An [`Exporter`] renders a [`ReportProjection`] to an Excel workbook or a
//! PDF document, hands the bytes to a [`DownloadSink`] under a dated
//! filename and reports what happened as an [`ExportOutcome`]. Rendering
//! and delivery errors are logged and folded into the outcome; they are
//! never returned to the caller.
//!
//! # Example
//!
//! ```
//! use leave_desk::export::{ExportFormat, Exporter, MemorySink};
//! use leave_desk::reports::{prepare_report, ReportFormat, ReportType};
//!
//! let projection = prepare_report(ReportType::Department, &[], &[], &[], &ReportFormat::default());
//! let sink = MemorySink::new();
//!
//! let outcome = Exporter::default().export(&projection, ExportFormat::Pdf, &sink);
//! assert!(outcome.success);
//! assert_eq!(sink.len(), 1);
//! ```

mod document;
mod outcome;
mod sink;
mod spreadsheet;

pub use document::render_document;
pub use outcome::{ExportFormat, ExportOutcome};
pub use sink::{DirectorySink, Download, DownloadSink, MemorySink};
pub use spreadsheet::{MAX_COLUMNS, MAX_SHEET_NAME_LEN, render_spreadsheet, sheet_name};

use chrono::{NaiveDate, Utc};
use tracing::{error, info};

use crate::config::ExportConfig;
use crate::error::LeaveResult;
use crate::reports::{ReportFormat, ReportProjection};

/// Builds the download filename `<stem>_<YYYY-MM-DD>.<ext>`.
///
/// ```
/// use chrono::NaiveDate;
/// use leave_desk::export::{export_filename, ExportFormat};
///
/// let day = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
/// assert_eq!(
///     export_filename("leave_type_report", day, ExportFormat::Excel),
///     "leave_type_report_2026-03-07.xlsx"
/// );
/// ```
pub fn export_filename(stem: &str, day: NaiveDate, format: ExportFormat) -> String {
    format!("{stem}_{}.{}", day.format("%Y-%m-%d"), format.extension())
}

/// Renders projections and delivers them.
#[derive(Debug, Clone)]
pub struct Exporter {
    settings: ExportConfig,
    format: ReportFormat,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}

impl Exporter {
    /// Creates an exporter from the export settings.
    pub fn new(settings: ExportConfig) -> Self {
        let format = ReportFormat::from(&settings);
        Self { settings, format }
    }

    /// Returns the export settings.
    pub fn settings(&self) -> &ExportConfig {
        &self.settings
    }

    /// Returns the cell format reports exported through this exporter use.
    pub fn report_format(&self) -> &ReportFormat {
        &self.format
    }

    /// Exports with today's UTC date in the filename.
    pub fn export(
        &self,
        projection: &ReportProjection,
        format: ExportFormat,
        sink: &dyn DownloadSink,
    ) -> ExportOutcome {
        self.export_on(projection, format, sink, Utc::now().date_naive())
    }

    /// Exports as of the given day, which dates both the filename and the
    /// generated-on line of PDF documents.
    pub fn export_on(
        &self,
        projection: &ReportProjection,
        format: ExportFormat,
        sink: &dyn DownloadSink,
        day: NaiveDate,
    ) -> ExportOutcome {
        let filename = export_filename(&projection.filename, day, format);

        let delivered = self
            .render(projection, format, day)
            .and_then(|bytes| sink.deliver(&filename, &bytes).map(|()| bytes.len()));

        match delivered {
            Ok(bytes) => {
                info!(
                    filename = %filename,
                    format = %format,
                    rows = projection.rows.len(),
                    bytes,
                    "Report exported"
                );
                ExportOutcome::success(filename)
            }
            Err(err) => {
                error!(filename = %filename, format = %format, error = %err, "Export failed");
                ExportOutcome::failure(format!("Failed to export {} file", format.label()))
            }
        }
    }

    /// Exports to an Excel workbook.
    pub fn export_to_excel(
        &self,
        projection: &ReportProjection,
        sink: &dyn DownloadSink,
    ) -> ExportOutcome {
        self.export(projection, ExportFormat::Excel, sink)
    }

    /// Exports to a PDF document.
    pub fn export_to_pdf(&self, projection: &ReportProjection, sink: &dyn DownloadSink) -> ExportOutcome {
        self.export(projection, ExportFormat::Pdf, sink)
    }

    fn render(
        &self,
        projection: &ReportProjection,
        format: ExportFormat,
        day: NaiveDate,
    ) -> LeaveResult<Vec<u8>> {
        match format {
            ExportFormat::Excel => render_spreadsheet(projection, self.settings.column_width),
            ExportFormat::Pdf => {
                render_document(projection, &self.format.date(day), &self.settings.pdf)
            }
        }
    }
}
