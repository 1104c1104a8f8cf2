//! Configuration types for leave-desk.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section carries
//! serde defaults, so a partial file (or an empty one) loads.

use serde::Deserialize;
use std::path::PathBuf;

/// The complete application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Where the data context is seeded from.
    pub data: DataConfig,
    /// Report export settings.
    pub export: ExportConfig,
    /// Holiday import settings.
    pub import: ImportConfig,
}

/// HTTP server bind settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind (e.g., "0.0.0.0").
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Data context seeding.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Optional YAML file holding holidays, employees, departments and
    /// leave requests. An empty context is used when unset.
    pub seed_path: Option<PathBuf>,
}

/// Report export settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported files are written to by the directory sink.
    pub output_dir: PathBuf,
    /// Uniform spreadsheet column width, in characters.
    pub column_width: f64,
    /// `chrono` format string for dates shown inside reports.
    pub date_format: String,
    /// PDF layout settings.
    pub pdf: PdfConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("exports"),
            column_width: 15.0,
            date_format: "%-m/%-d/%Y".to_string(),
            pdf: PdfConfig::default(),
        }
    }
}

/// PDF layout settings. Lengths are in PDF points.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Page width (A4 portrait by default).
    pub page_width: f64,
    /// Page height.
    pub page_height: f64,
    /// Left and right margin.
    pub margin: f64,
    /// Distance from the top edge to the title baseline.
    pub title_top: f64,
    /// Distance from the top edge to the generated-on baseline.
    pub meta_top: f64,
    /// Distance from the top edge to the first table row on every page.
    pub table_top: f64,
    /// Bottom margin the table never crosses.
    pub margin_bottom: f64,
    /// Font size of the title line.
    pub title_font_size: f64,
    /// Font size of the generated-on line.
    pub meta_font_size: f64,
    /// Font size of table cells.
    pub body_font_size: f64,
    /// Padding inside each table cell.
    pub cell_padding: f64,
    /// Header row fill, RGB 0-255.
    pub header_fill: [u8; 3],
    /// Header row text colour, RGB 0-255.
    pub header_text: [u8; 3],
    /// Fill of every other body row, RGB 0-255.
    pub alternate_fill: [u8; 3],
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page_width: 595.28,
            page_height: 841.89,
            margin: 39.69,
            title_top: 62.36,
            meta_top: 90.71,
            table_top: 113.39,
            margin_bottom: 39.69,
            title_font_size: 18.0,
            meta_font_size: 10.0,
            body_font_size: 8.0,
            cell_padding: 8.5,
            header_fill: [66, 139, 202],
            header_text: [255, 255, 255],
            alternate_fill: [245, 245, 245],
        }
    }
}

/// Holiday import settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Delay before the simulated import notification fires.
    pub notification_delay_ms: u64,
    /// Largest file the import dialog accepts.
    pub max_file_size_bytes: u64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            notification_delay_ms: 100,
            max_file_size_bytes: 10 * 1024 * 1024,
        }
    }
}
