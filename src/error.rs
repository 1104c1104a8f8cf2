//! Error types for leave-desk.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the holiday controller, the report pipeline and the
//! configuration loader can produce.

use thiserror::Error;

/// The main error type for leave-desk.
///
/// # Example
///
/// ```
/// use leave_desk::error::LeaveError;
///
/// let error = LeaveError::HolidayNotFound {
///     id: "7c1e".to_string(),
/// };
/// assert_eq!(error.to_string(), "Holiday not found: 7c1e");
/// ```
#[derive(Debug, Error)]
pub enum LeaveError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The seed file for the data context could not be parsed.
    #[error("Failed to parse seed data '{path}': {message}")]
    SeedParseError {
        /// The path to the seed file.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No holiday exists with the given id.
    #[error("Holiday not found: {id}")]
    HolidayNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A holiday form field failed the required-field checks.
    #[error("Invalid holiday field '{field}': {message}")]
    InvalidHoliday {
        /// The offending form field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// The selected import file does not carry an accepted extension.
    #[error("Unsupported import file '{file_name}': expected {expected}")]
    UnsupportedImportFile {
        /// The name of the selected file.
        file_name: String,
        /// The accepted extensions, comma separated.
        expected: String,
    },

    /// The selected import file exceeds the configured size limit.
    #[error("Import file '{file_name}' is {size_bytes} bytes, limit is {limit_bytes} bytes")]
    ImportFileTooLarge {
        /// The name of the selected file.
        file_name: String,
        /// The reported size of the file.
        size_bytes: u64,
        /// The configured maximum size.
        limit_bytes: u64,
    },

    /// A confirm/complete step was invoked with nothing pending.
    #[error("No pending {action}")]
    NoPendingAction {
        /// The action that had nothing to act on (e.g. "deletion").
        action: String,
    },

    /// Rendering a report into a file format failed.
    #[error("Failed to render {format} file: {message}")]
    Serialization {
        /// The target format (e.g. "Excel").
        format: String,
        /// A description of the failure.
        message: String,
    },

    /// Handing the rendered file to its download target failed.
    #[error("Failed to deliver '{filename}': {message}")]
    Delivery {
        /// The generated filename.
        filename: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return LeaveError.
pub type LeaveResult<T> = Result<T, LeaveError>;
