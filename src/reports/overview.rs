//! The leave overview report: one row per leave request.

use chrono::NaiveDate;

use crate::models::LeaveRequest;

use super::format::{ReportFormat, capitalize};
use super::lookup::{Directory, UNKNOWN};
use super::projection::ReportRecord;

/// Report title.
pub const OVERVIEW_TITLE: &str = "Leave Management Overview Report";

/// Filename stem.
pub const OVERVIEW_FILENAME: &str = "leave_overview_report";

/// A leave request joined with its employee and department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRow {
    /// Employee name, or "Unknown".
    pub employee_name: String,
    /// Employee code, or "Unknown".
    pub employee_code: String,
    /// Department name, or "Unknown".
    pub department: String,
    /// Lowercase leave type name.
    pub leave_type: &'static str,
    /// First day of leave.
    pub from_date: NaiveDate,
    /// Last day of leave.
    pub to_date: NaiveDate,
    /// Days charged.
    pub days: u32,
    /// Lowercase status name.
    pub status: &'static str,
    /// The (UTC) day the request was filed.
    pub applied_on: NaiveDate,
}

impl ReportRecord for OverviewRow {
    const HEADERS: &'static [&'static str] = &[
        "Employee Name",
        "Employee ID",
        "Department",
        "Leave Type",
        "From Date",
        "To Date",
        "Days",
        "Status",
        "Applied Date",
    ];

    fn cells(&self, format: &ReportFormat) -> Vec<String> {
        vec![
            self.employee_name.clone(),
            self.employee_code.clone(),
            self.department.clone(),
            capitalize(self.leave_type),
            format.date(self.from_date),
            format.date(self.to_date),
            self.days.to_string(),
            capitalize(self.status),
            format.date(self.applied_on),
        ]
    }
}

/// Joins every request with its employee and the employee's department.
///
/// A request whose employee is missing gets "Unknown" for all three joined
/// fields; an employee whose department is missing gets "Unknown" for the
/// department only.
pub fn overview_rows(requests: &[LeaveRequest], directory: &Directory<'_>) -> Vec<OverviewRow> {
    requests
        .iter()
        .map(|request| {
            let employee = directory.employee(&request.employee_id);
            let department = employee
                .map(|e| directory.department_name(&e.department_id))
                .unwrap_or_else(|| UNKNOWN.to_string());

            OverviewRow {
                employee_name: employee
                    .map(|e| e.name.clone())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                employee_code: employee
                    .map(|e| e.employee_id.clone())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                department,
                leave_type: request.leave_type.as_str(),
                from_date: request.from_date,
                to_date: request.to_date,
                days: request.days_count,
                status: request.status.as_str(),
                applied_on: request.created_at.date_naive(),
            }
        })
        .collect()
}
