//! HTTP API module for leave-desk.
//!
//! This module provides the REST endpoints for holiday administration and
//! for previewing and exporting leave reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DeleteQuery, ExportQuery, HolidayRequest, ImportRequest, ListingQuery};
pub use response::{ApiError, ApiErrorResponse, HolidaysResponse, ImportResponse};
pub use state::{AppState, SharedScreen};
