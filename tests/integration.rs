//! Integration tests for the leave-desk HTTP API.
//!
//! This suite drives the router end to end against the sample seed data:
//! - Holiday listing, create, update and confirmed delete
//! - Stub import acceptance and rejection
//! - Report projections for every report type
//! - Excel and PDF export, streamed and saved
//! - Error cases

use std::io::{Cursor, Read};
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use leave_desk::api::{AppState, create_router};
use leave_desk::config::{AppConfig, ConfigLoader, ExportConfig};
use leave_desk::context::DataContext;
use leave_desk::holidays::TracingNotifier;
use leave_desk::reports::ReportProjection;

// =============================================================================
// Test Helpers
// =============================================================================

fn seeded_context() -> DataContext {
    DataContext::from_seed_file("./data/seed.yaml").expect("Failed to load seed data")
}

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/leave_desk.yaml").expect("Failed to load config");
    AppState::new(config, seeded_context(), Arc::new(TracingNotifier))
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(router, method, uri, body).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn row<'a>(report: &'a Value, column: &str, value: &str) -> &'a Value {
    report["rows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r[column] == value)
        .unwrap_or_else(|| panic!("no row with {column} = {value}"))
}

// =============================================================================
// Holidays
// =============================================================================

#[tokio::test]
async fn test_list_holidays_sorted_with_flags() {
    let router = create_router_for_test();
    let (status, body) = send_json(&router, "GET", "/holidays?today=2026-05-01", None).await;

    assert_eq!(status, StatusCode::OK);
    let holidays = body["holidays"].as_array().unwrap();
    let names: Vec<&str> = holidays.iter().map(|h| h["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["New Year's Day", "Labour Day", "Christmas Day"]);

    assert_eq!(holidays[0]["is_past"], true);
    assert_eq!(holidays[1]["is_today"], true);
    assert_eq!(holidays[1]["is_past"], false);
    assert_eq!(holidays[1]["weekday"], "Friday");
    assert_eq!(holidays[1]["description_label"], "-");
    assert_eq!(holidays[2]["is_past"], false);

    assert_eq!(body["summary"]["total"], 3);
    assert_eq!(body["summary"]["upcoming"], 1);
    assert_eq!(body["summary"]["current_year"], 2026);
}

#[tokio::test]
async fn test_list_holidays_rejects_bad_date() {
    let router = create_router_for_test();
    let (status, body) = send_json(&router, "GET", "/holidays?today=tomorrow", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_holiday() {
    let router = create_router_for_test();
    let (status, created) = send_json(
        &router,
        "POST",
        "/holidays",
        Some(json!({"name": "Founders Day", "date": "2026-09-14", "description": "Company anniversary"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Founders Day");
    assert_eq!(created["date"], "2026-09-14");
    assert!(!created["id"].as_str().unwrap().is_empty());

    let (_, listing) = send_json(&router, "GET", "/holidays?today=2026-01-01", None).await;
    assert_eq!(listing["summary"]["total"], 4);
    assert_eq!(listing["holidays"][2]["name"], "Founders Day");
}

#[tokio::test]
async fn test_create_holiday_blank_name_rejected() {
    let router = create_router_for_test();
    let (status, body) = send_json(
        &router,
        "POST",
        "/holidays",
        Some(json!({"name": "  ", "date": "2026-09-14"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_create_holiday_missing_field() {
    let router = create_router_for_test();
    let (status, body) = send_json(&router, "POST", "/holidays", Some(json!({"name": "No Date"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_create_holiday_malformed_json() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/holidays")
                .header("Content-Type", "application/json")
                .body(Body::from("{ not valid json }"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_update_holiday_keeps_id() {
    let router = create_router_for_test();
    let (status, updated) = send_json(
        &router,
        "PUT",
        "/holidays/hol-labour-day",
        Some(json!({"name": "Workers' Day", "date": "2026-05-04"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], "hol-labour-day");
    assert_eq!(updated["name"], "Workers' Day");

    let (_, listing) = send_json(&router, "GET", "/holidays?today=2026-01-01", None).await;
    assert_eq!(listing["summary"]["total"], 3);
    let matching: Vec<&Value> = listing["holidays"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|h| h["id"] == "hol-labour-day")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["date"], "2026-05-04");
    assert_eq!(matching[0]["weekday"], "Monday");
}

#[tokio::test]
async fn test_update_unknown_holiday() {
    let router = create_router_for_test();
    let (status, body) = send_json(
        &router,
        "PUT",
        "/holidays/missing",
        Some(json!({"name": "Ghost", "date": "2026-05-04"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "HOLIDAY_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let router = create_router_for_test();
    let (status, body) = send_json(&router, "DELETE", "/holidays/hol-christmas", None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFIRMATION_REQUIRED");
    assert_eq!(body["message"], "Are you sure you want to delete this holiday?");

    let (_, listing) = send_json(&router, "GET", "/holidays", None).await;
    assert_eq!(listing["summary"]["total"], 3);
}

#[tokio::test]
async fn test_confirmed_delete_removes_exactly_one() {
    let router = create_router_for_test();
    let (status, removed) =
        send_json(&router, "DELETE", "/holidays/hol-christmas?confirm=true", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["id"], "hol-christmas");

    let (_, listing) = send_json(&router, "GET", "/holidays?today=2026-01-01", None).await;
    let ids: Vec<&str> = listing["holidays"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["hol-new-year", "hol-labour-day"]);
}

#[tokio::test]
async fn test_delete_unknown_holiday() {
    let router = create_router_for_test();
    let (status, body) = send_json(&router, "DELETE", "/holidays/missing?confirm=true", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "HOLIDAY_NOT_FOUND");
}

// =============================================================================
// Import
// =============================================================================

#[tokio::test]
async fn test_import_accepted_without_creating_holidays() {
    let router = create_router_for_test();
    let (status, body) = send_json(
        &router,
        "POST",
        "/holidays/import",
        Some(json!({"kind": "excel", "file_name": "holidays-2027.xlsx", "size_bytes": 20480})),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["accepted"], true);
    assert_eq!(body["notification"]["type"], "success");
    assert_eq!(body["notification"]["title"], "Import Successful");
    assert_eq!(
        body["notification"]["message"],
        "Holidays imported successfully from holidays-2027.xlsx"
    );

    let (_, listing) = send_json(&router, "GET", "/holidays", None).await;
    assert_eq!(listing["summary"]["total"], 3);
}

#[tokio::test]
async fn test_import_wrong_extension() {
    let router = create_router_for_test();
    let (status, body) = send_json(
        &router,
        "POST",
        "/holidays/import",
        Some(json!({"kind": "pdf", "file_name": "holidays.xlsx", "size_bytes": 100})),
    )
    .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["code"], "UNSUPPORTED_IMPORT_FILE");
}

#[tokio::test]
async fn test_import_too_large() {
    let router = create_router_for_test();
    let (status, body) = send_json(
        &router,
        "POST",
        "/holidays/import",
        Some(json!({"kind": "pdf", "file_name": "holidays.pdf", "size_bytes": 11 * 1024 * 1024})),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], "IMPORT_FILE_TOO_LARGE");
}

// =============================================================================
// Reports
// =============================================================================

#[tokio::test]
async fn test_overview_report() {
    let router = create_router_for_test();
    let (status, report) = send_json(&router, "GET", "/reports/overview", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["title"], "Leave Management Overview Report");
    assert_eq!(report["rows"].as_array().unwrap().len(), 4);

    let first = &report["rows"][0];
    assert_eq!(first["Employee Name"], "Asha Rao");
    assert_eq!(first["Employee ID"], "E001");
    assert_eq!(first["Department"], "Engineering");
    assert_eq!(first["Leave Type"], "Sick");
    assert_eq!(first["From Date"], "2/2/2026");
    assert_eq!(first["To Date"], "2/3/2026");
    assert_eq!(first["Days"], "2");
    assert_eq!(first["Status"], "Approved");
    assert_eq!(first["Applied Date"], "1/30/2026");
}

#[tokio::test]
async fn test_department_report() {
    let router = create_router_for_test();
    let (_, report) = send_json(&router, "GET", "/reports/department", None).await;

    let engineering = row(&report, "Department", "Engineering");
    assert_eq!(engineering["Total Employees"], "2");
    assert_eq!(engineering["Total Requests"], "3");
    assert_eq!(engineering["Approved"], "1");
    assert_eq!(engineering["Pending"], "1");
    assert_eq!(engineering["Rejected"], "1");
    assert_eq!(engineering["Total Days Approved"], "2");
    assert_eq!(engineering["Avg Days per Employee"], "1.0");

    let operations = row(&report, "Department", "Operations");
    assert_eq!(operations["Avg Days per Employee"], "5.0");

    let finance = row(&report, "Department", "Finance");
    assert_eq!(finance["Total Employees"], "0");
    assert_eq!(finance["Avg Days per Employee"], "0");
}

#[tokio::test]
async fn test_employee_report() {
    let router = create_router_for_test();
    let (_, report) = send_json(&router, "GET", "/reports/employee", None).await;

    let asha = row(&report, "Employee Name", "Asha Rao");
    assert_eq!(asha["Total Requests"], "2");
    assert_eq!(asha["Approved"], "1");
    assert_eq!(asha["Pending"], "1");
    assert_eq!(asha["Rejected"], "0");
    assert_eq!(asha["Total Days Used"], "2");
    assert_eq!(asha["Joining Date"], "1/6/2020");
    assert_eq!(asha["Status"], "Active");

    let mei = row(&report, "Employee Name", "Mei Chen");
    assert_eq!(mei["Department"], "Operations");
    assert_eq!(mei["Status"], "Inactive");
}

#[tokio::test]
async fn test_leave_type_report() {
    let router = create_router_for_test();
    let (_, report) = send_json(&router, "GET", "/reports/leave-type", None).await;

    let types: Vec<&str> = report["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["Leave Type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["Casual", "Sick", "Paid"]);

    let paid = row(&report, "Leave Type", "Paid");
    assert_eq!(paid["Total Requests"], "2");
    assert_eq!(paid["Total Days"], "5");
    assert_eq!(paid["Avg Days per Request"], "5.0");
    assert_eq!(paid["Approval Rate"], "50.0%");

    let casual = row(&report, "Leave Type", "Casual");
    assert_eq!(casual["Approval Rate"], "0.0%");
}

#[tokio::test]
async fn test_unknown_report_falls_back_to_overview() {
    let router = create_router_for_test();
    let (status, report) = send_json(&router, "GET", "/reports/payroll", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["filename"], "leave_overview_report");
}

#[tokio::test]
async fn test_every_row_has_every_header() {
    let router = create_router_for_test();
    for report_type in ["overview", "department", "employee", "leave-type"] {
        let (_, report) = send_json(&router, "GET", &format!("/reports/{report_type}"), None).await;
        let headers = report["headers"].as_array().unwrap();

        for row in report["rows"].as_array().unwrap() {
            for header in headers {
                assert!(
                    row.get(header.as_str().unwrap()).is_some(),
                    "{report_type} row missing {header}"
                );
            }
        }
    }
}

#[tokio::test]
async fn test_row_keys_arrive_in_header_order() {
    let router = create_router_for_test();
    for report_type in ["overview", "department", "employee", "leave-type"] {
        let (status, bytes) = send(&router, "GET", &format!("/reports/{report_type}"), None).await;
        assert_eq!(status, StatusCode::OK);

        let report: ReportProjection = serde_json::from_slice(&bytes).unwrap();
        assert!(!report.rows.is_empty(), "{report_type} has no rows");
        for row in &report.rows {
            let keys: Vec<&str> = row.iter().map(|(header, _)| header).collect();
            assert_eq!(keys, report.headers, "{report_type} row keys out of order");
        }
    }
}

// =============================================================================
// Export
// =============================================================================

/// Reads one XML part out of an `.xlsx` archive.
fn workbook_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive.by_name(name).unwrap().read_to_string(&mut xml).unwrap();
    xml
}

#[tokio::test]
async fn test_export_excel_attachment() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .uri("/reports/department/export/xlsx")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"department_leave_report_"));
    assert!(disposition.ends_with(".xlsx\""));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[0..2], b"PK");

    let workbook = workbook_part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="Department-wise Leave Report""#));

    // Shared strings are numbered in first-written order: the header row,
    // then the first department.
    let shared = workbook_part(&bytes, "xl/sharedStrings.xml");
    let sheet = workbook_part(&bytes, "xl/worksheets/sheet1.xml");
    let department = shared.find("<t>Department</t>").unwrap();
    let engineering = shared.find("<t>Engineering</t>").unwrap();
    assert!(department < engineering);
    assert!(sheet.contains(r#"<c r="A1" s="#));
    assert!(sheet.contains(r#"t="s"><v>0</v></c>"#));
    assert!(sheet.contains(r#"<c r="A2" t="s">"#));
    assert!(sheet.contains(r#"<c r="H4" t="s">"#));
    assert!(!sheet.contains(r#"<c r="A5""#));
}

#[tokio::test]
async fn test_export_pdf_attachment() {
    let router = create_router_for_test();
    let (status, bytes) = send(&router, "GET", "/reports/leave-type/export/pdf", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(bytes.starts_with(b"%PDF"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("(Leave Type Analysis Report) Tj"));
    assert!(text.contains("(Casual) Tj"));
    assert!(text.contains("(50.0%) Tj"));
}

#[tokio::test]
async fn test_export_unsupported_format() {
    let router = create_router_for_test();
    let (status, body) = send_json(&router, "GET", "/reports/overview/export/csv", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNSUPPORTED_FORMAT");
}

#[tokio::test]
async fn test_export_saved_to_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::from_config(AppConfig {
        export: ExportConfig {
            output_dir: dir.path().to_path_buf(),
            ..ExportConfig::default()
        },
        ..AppConfig::default()
    });
    let router = create_router(AppState::new(config, seeded_context(), Arc::new(TracingNotifier)));

    let (status, outcome) =
        send_json(&router, "GET", "/reports/leave-type/export/pdf?save=true", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["success"], true);
    let filename = outcome["filename"].as_str().unwrap();
    assert!(filename.starts_with("leave_type_report_"));
    assert!(dir.path().join(filename).exists());
}

#[tokio::test]
async fn test_export_failure_returns_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();

    let config = ConfigLoader::from_config(AppConfig {
        export: ExportConfig {
            output_dir: blocker,
            ..ExportConfig::default()
        },
        ..AppConfig::default()
    });
    let router = create_router(AppState::new(config, seeded_context(), Arc::new(TracingNotifier)));

    let (status, outcome) =
        send_json(&router, "GET", "/reports/overview/export/xlsx?save=true", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(outcome, json!({"success": false, "error": "Failed to export Excel file"}));
}

#[tokio::test]
async fn test_export_empty_context_succeeds() {
    let router = create_router(AppState::new(
        ConfigLoader::default(),
        DataContext::default(),
        Arc::new(TracingNotifier),
    ));

    let (status, bytes) = send(&router, "GET", "/reports/leave-type/export/xlsx", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&bytes[0..2], b"PK");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_exports_all_complete() {
    let router = create_router_for_test();
    let mut exports = tokio::task::JoinSet::new();

    for i in 0..8 {
        let router = router.clone();
        let uri = if i % 2 == 0 {
            "/reports/overview/export/pdf"
        } else {
            "/reports/employee/export/xlsx"
        };
        exports.spawn(async move { send(&router, "GET", uri, None).await });
    }

    let mut completed = 0;
    while let Some(result) = exports.join_next().await {
        let (status, bytes) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert!(bytes.starts_with(b"%PDF") || bytes.starts_with(b"PK"));
        completed += 1;
    }
    assert_eq!(completed, 8);
}
