//! Export formats and the structured result of an export.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A file format reports can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Excel workbook (`.xlsx`).
    Excel,
    /// PDF document (`.pdf`).
    Pdf,
}

impl ExportFormat {
    /// Parses a format from a file extension or name (`xlsx`, `excel`, `pdf`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "xlsx" | "excel" => Some(ExportFormat::Excel),
            "pdf" => Some(ExportFormat::Pdf),
            _ => None,
        }
    }

    /// The file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// The MIME type of the produced file.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Human-readable name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What an export produced: the filename on success, a message on failure.
///
/// Serializes as `{"success":true,"filename":"..."}` or
/// `{"success":false,"error":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOutcome {
    /// Whether the file was produced and delivered.
    pub success: bool,
    /// The generated filename.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// A human-readable failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportOutcome {
    /// A successful export.
    pub fn success(filename: impl Into<String>) -> Self {
        Self {
            success: true,
            filename: Some(filename.into()),
            error: None,
        }
    }

    /// A failed export.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            filename: None,
            error: Some(message.into()),
        }
    }
}
