//! Holiday import from Excel or PDF files.
//!
//! Import is a stub: a selected file is checked against the accepted
//! extensions and the size limit, then a success toast is scheduled after a
//! short delay. File contents are never read and no holidays are created.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::notify::{Notifier, Toast};
use crate::config::ImportConfig;
use crate::error::{LeaveError, LeaveResult};

/// The kind of file an import starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    /// An Excel workbook.
    Excel,
    /// A PDF document.
    Pdf,
}

impl ImportKind {
    /// File extensions the picker accepts, with the leading dot.
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            ImportKind::Excel => &[".xlsx", ".xls"],
            ImportKind::Pdf => &[".pdf"],
        }
    }

    /// Returns true if the file name ends in an accepted extension.
    pub fn accepts(&self, file_name: &str) -> bool {
        let Some(ext) = Path::new(file_name).extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = format!(".{}", ext.to_ascii_lowercase());
        self.accepted_extensions().contains(&ext.as_str())
    }

    /// Dialog heading, e.g. "Import from Excel Sheet".
    pub fn title(&self) -> &'static str {
        match self {
            ImportKind::Excel => "Import from Excel Sheet",
            ImportKind::Pdf => "Import from PDF",
        }
    }

    /// Expected file layout, one bullet per entry.
    pub fn guidelines(&self) -> &'static [&'static str] {
        match self {
            ImportKind::Excel => &[
                "Column A: Holiday Name (required)",
                "Column B: Date (YYYY-MM-DD format)",
                "Column C: Description (optional)",
                "First row should contain headers",
                "Maximum file size: 10MB",
            ],
            ImportKind::Pdf => &[
                "PDF should contain holiday names and dates",
                "Text should be selectable (not scanned images)",
                "Dates should be in recognizable format",
                "Maximum file size: 10MB",
                "Processing may take a few moments",
            ],
        }
    }
}

/// A file picked for import. Only its metadata is ever looked at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFile {
    /// The selected file's name.
    pub file_name: String,
    /// The selected file's size.
    pub size_bytes: u64,
}

/// Accepts import files and announces a simulated success.
#[derive(Clone)]
pub struct StubImporter {
    settings: ImportConfig,
    notifier: Arc<dyn Notifier>,
}

impl StubImporter {
    /// Creates an importer that announces through the given notifier.
    pub fn new(settings: ImportConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self { settings, notifier }
    }

    /// Checks the file and schedules the success toast.
    ///
    /// Returns the toast that will be delivered once the configured delay
    /// has passed. Inside a tokio runtime the delay runs as a task,
    /// otherwise on a short-lived thread.
    pub fn import(&self, kind: ImportKind, file: &ImportFile) -> LeaveResult<Toast> {
        if !kind.accepts(&file.file_name) {
            return Err(LeaveError::UnsupportedImportFile {
                file_name: file.file_name.clone(),
                expected: kind.accepted_extensions().join(", "),
            });
        }
        if file.size_bytes > self.settings.max_file_size_bytes {
            return Err(LeaveError::ImportFileTooLarge {
                file_name: file.file_name.clone(),
                size_bytes: file.size_bytes,
                limit_bytes: self.settings.max_file_size_bytes,
            });
        }

        info!(kind = ?kind, file_name = %file.file_name, size_bytes = file.size_bytes, "Processing import file");

        let toast = Toast::success(
            "Import Successful",
            format!("Holidays imported successfully from {}", file.file_name),
        );
        self.schedule(toast.clone());
        Ok(toast)
    }

    fn schedule(&self, toast: Toast) {
        let delay = Duration::from_millis(self.settings.notification_delay_ms);
        let notifier = Arc::clone(&self.notifier);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    notifier.notify(toast);
                });
            }
            Err(_) => {
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    notifier.notify(toast);
                });
            }
        }
    }
}
