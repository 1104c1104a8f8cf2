//! Request types for the leave-desk API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::holidays::{HolidayForm, ImportFile, ImportKind};

/// Body of `POST /holidays` and `PUT /holidays/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// Holiday name.
    pub name: String,
    /// Holiday date as `YYYY-MM-DD`.
    pub date: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

impl From<HolidayRequest> for HolidayForm {
    fn from(request: HolidayRequest) -> Self {
        HolidayForm {
            name: request.name,
            date: request.date,
            description: request.description.unwrap_or_default(),
        }
    }
}

/// Body of `POST /holidays/import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Which import dialog the file was picked in.
    pub kind: ImportKind,
    /// The picked file's name.
    pub file_name: String,
    /// The picked file's size.
    pub size_bytes: u64,
}

impl ImportRequest {
    /// The file metadata handed to the importer.
    pub fn file(&self) -> ImportFile {
        ImportFile {
            file_name: self.file_name.clone(),
            size_bytes: self.size_bytes,
        }
    }
}

/// Query of `GET /holidays`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    /// The date to flag as today; the current UTC date when absent.
    pub today: Option<NaiveDate>,
}

/// Query of `DELETE /holidays/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteQuery {
    /// Must be true for the deletion to go ahead.
    #[serde(default)]
    pub confirm: bool,
}

/// Query of `GET /reports/:report_type/export/:format`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportQuery {
    /// Save into the configured output directory instead of returning the
    /// file as an attachment.
    #[serde(default)]
    pub save: bool,
}
