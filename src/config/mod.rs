//! Configuration loading and management for leave-desk.
//!
//! This module loads server, data, export and import settings from a YAML
//! file.
//!
//! # Example
//!
//! ```no_run
//! use leave_desk::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/leave_desk.yaml").unwrap();
//! println!("Column width: {}", config.export().column_width);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DataConfig, ExportConfig, ImportConfig, PdfConfig, ServerConfig};
