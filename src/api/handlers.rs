//! HTTP request handlers for the leave-desk API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::context::HolidayStore;
use crate::error::LeaveError;
use crate::export::{Download, ExportFormat, ExportOutcome, MemorySink};
use crate::holidays::DELETE_CONFIRMATION;
use crate::models::HolidayId;
use crate::reports::{ReportProjection, prepare_report_by_name};

use super::request::{DeleteQuery, ExportQuery, HolidayRequest, ImportRequest, ListingQuery};
use super::response::{ApiError, ApiErrorResponse, HolidaysResponse, ImportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/holidays", get(list_holidays).post(create_holiday))
        .route("/holidays/import", post(import_holidays))
        .route("/holidays/:id", put(update_holiday).delete(delete_holiday))
        .route("/reports/:report_type", get(get_report))
        .route("/reports/:report_type/export/:format", get(export_report))
        .with_state(state)
}

/// Maps a JSON body rejection to an API error.
///
/// serde's "missing field" data errors become `VALIDATION_ERROR`; everything
/// else is `MALFORMED_JSON`.
fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

fn query_rejection(correlation_id: Uuid, rejection: QueryRejection) -> ApiErrorResponse {
    let body_text = rejection.body_text();
    warn!(correlation_id = %correlation_id, error = %body_text, "Invalid query string");
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, ApiError::validation_error(body_text))
}

/// Logs a domain error against the request and converts it.
fn failed(correlation_id: Uuid, err: LeaveError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    err.into()
}

/// Handler for GET /holidays.
async fn list_holidays(
    State(state): State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|r| query_rejection(correlation_id, r))?;
    let today = query.today.unwrap_or_else(|| Utc::now().date_naive());

    let screen = state.screen().read().await;
    let body = HolidaysResponse {
        holidays: screen.listing(today),
        summary: screen.summary(today),
    };

    info!(
        correlation_id = %correlation_id,
        today = %today,
        holidays = body.holidays.len(),
        "Listed holidays"
    );
    Ok(Json(body).into_response())
}

/// Handler for POST /holidays.
async fn create_holiday(
    State(state): State<AppState>,
    payload: Result<Json<HolidayRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| json_rejection(correlation_id, r))?;

    let mut screen = state.screen().write().await;
    screen.open_form();
    *screen.form_mut() = request.into();

    match screen.submit() {
        Ok(holiday) => {
            info!(correlation_id = %correlation_id, id = %holiday.id, "Holiday created");
            Ok((StatusCode::CREATED, Json(holiday)).into_response())
        }
        Err(err) => {
            screen.cancel_form();
            Err(failed(correlation_id, err))
        }
    }
}

/// Handler for PUT /holidays/:id.
async fn update_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<HolidayRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| json_rejection(correlation_id, r))?;
    let id = HolidayId::from(id);

    let mut screen = state.screen().write().await;
    screen
        .begin_edit(&id)
        .map_err(|e| failed(correlation_id, e))?;
    *screen.form_mut() = request.into();

    match screen.submit() {
        Ok(holiday) => {
            info!(correlation_id = %correlation_id, id = %holiday.id, "Holiday updated");
            Ok(Json(holiday).into_response())
        }
        Err(err) => {
            screen.cancel_form();
            Err(failed(correlation_id, err))
        }
    }
}

/// Handler for DELETE /holidays/:id.
///
/// The deletion only happens with `?confirm=true`; otherwise the
/// confirmation prompt comes back as a 409.
async fn delete_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|r| query_rejection(correlation_id, r))?;
    let id = HolidayId::from(id);

    let mut screen = state.screen().write().await;
    if screen.store().find_holiday(&id).is_none() {
        return Err(failed(
            correlation_id,
            LeaveError::HolidayNotFound { id: id.to_string() },
        ));
    }

    if !query.confirm {
        info!(correlation_id = %correlation_id, id = %id, "Deletion not confirmed");
        return Err(ApiErrorResponse::new(
            StatusCode::CONFLICT,
            ApiError::confirmation_required(DELETE_CONFIRMATION),
        ));
    }

    screen
        .request_delete(&id)
        .map_err(|e| failed(correlation_id, e))?;
    let removed = screen
        .confirm_delete()
        .map_err(|e| failed(correlation_id, e))?;

    info!(correlation_id = %correlation_id, id = %removed.id, "Holiday deleted");
    Ok(Json(removed).into_response())
}

/// Handler for POST /holidays/import.
async fn import_holidays(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| json_rejection(correlation_id, r))?;

    let mut screen = state.screen().write().await;
    screen.open_import(request.kind);

    match screen.select_import_file(&request.file()) {
        Ok(notification) => {
            info!(
                correlation_id = %correlation_id,
                file_name = %request.file_name,
                "Import accepted"
            );
            let body = ImportResponse {
                accepted: true,
                notification,
            };
            Ok((StatusCode::ACCEPTED, Json(body)).into_response())
        }
        Err(err) => {
            screen.close_import();
            Err(failed(correlation_id, err))
        }
    }
}

/// Builds a projection from a read-locked snapshot of the data context.
async fn projection_for(state: &AppState, report_type: &str) -> ReportProjection {
    let screen = state.screen().read().await;
    prepare_report_by_name(
        report_type,
        screen.store().records(),
        state.exporter().report_format(),
    )
}

/// Handler for GET /reports/:report_type.
async fn get_report(
    State(state): State<AppState>,
    Path(report_type): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let start_time = Instant::now();

    let projection = projection_for(&state, &report_type).await;

    info!(
        correlation_id = %correlation_id,
        report_type = %report_type,
        rows = projection.rows.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Report prepared"
    );
    Json(projection).into_response()
}

/// Handler for GET /reports/:report_type/export/:format.
///
/// Returns the file as an attachment, or with `?save=true` writes it into
/// the output directory and returns the export outcome.
async fn export_report(
    State(state): State<AppState>,
    Path((report_type, format)): Path<(String, String)>,
    query: Result<Query<ExportQuery>, QueryRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|r| query_rejection(correlation_id, r))?;

    let Some(format) = ExportFormat::from_name(&format) else {
        warn!(correlation_id = %correlation_id, format = %format, "Unsupported export format");
        return Err(ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::unsupported_format(&format),
        ));
    };

    let start_time = Instant::now();
    let projection = projection_for(&state, &report_type).await;
    let (outcome, download) = run_export(&state, projection, format, query.save).await;

    if query.save {
        let status = if outcome.success {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        info!(
            correlation_id = %correlation_id,
            success = outcome.success,
            dir = %state.archive().dir().display(),
            "Export saved"
        );
        return Ok((status, Json(outcome)).into_response());
    }

    match download {
        Some(download) if outcome.success => {
            info!(
                correlation_id = %correlation_id,
                filename = %download.filename,
                bytes = download.bytes.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Export streamed"
            );
            let disposition = format!("attachment; filename=\"{}\"", download.filename);
            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, format.content_type().to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                download.bytes,
            )
                .into_response())
        }
        _ => {
            warn!(correlation_id = %correlation_id, error = ?outcome.error, "Export failed");
            Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(outcome)).into_response())
        }
    }
}

/// Renders and delivers an export on the blocking pool.
///
/// With `save` the file goes to the archive directory; otherwise it is
/// captured in memory and handed back for streaming.
async fn run_export(
    state: &AppState,
    projection: ReportProjection,
    format: ExportFormat,
    save: bool,
) -> (ExportOutcome, Option<Download>) {
    let state = state.clone();
    let job = tokio::task::spawn_blocking(move || {
        if save {
            (state.exporter().export(&projection, format, state.archive()), None)
        } else {
            let sink = MemorySink::new();
            let outcome = state.exporter().export(&projection, format, &sink);
            (outcome, sink.take_last())
        }
    });

    match job.await {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, format = %format, "Export task join error");
            (
                ExportOutcome::failure(format!("Failed to export {} file", format.label())),
                None,
            )
        }
    }
}
