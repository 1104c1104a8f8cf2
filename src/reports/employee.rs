//! The employee report: one row per employee.

use chrono::NaiveDate;

use crate::models::{Employee, LeaveRequest};

use super::format::{ReportFormat, capitalize};
use super::lookup::Directory;
use super::projection::ReportRecord;
use super::tally::StatusTally;

/// Report title.
pub const EMPLOYEE_TITLE: &str = "Employee-wise Leave Report";

/// Filename stem.
pub const EMPLOYEE_FILENAME: &str = "employee_leave_report";

/// Leave statistics for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    /// Employee name.
    pub name: String,
    /// Employee code.
    pub employee_code: String,
    /// Department name, or "Unknown".
    pub department: String,
    /// Job title.
    pub position: String,
    /// Counts over the employee's requests.
    pub tally: StatusTally,
    /// The date the employee joined.
    pub joining_date: NaiveDate,
    /// Employment status as stored.
    pub status: String,
}

impl ReportRecord for EmployeeRow {
    const HEADERS: &'static [&'static str] = &[
        "Employee Name",
        "Employee ID",
        "Department",
        "Position",
        "Total Requests",
        "Approved",
        "Pending",
        "Rejected",
        "Total Days Used",
        "Joining Date",
        "Status",
    ];

    fn cells(&self, format: &ReportFormat) -> Vec<String> {
        vec![
            self.name.clone(),
            self.employee_code.clone(),
            self.department.clone(),
            self.position.clone(),
            self.tally.total.to_string(),
            self.tally.approved.to_string(),
            self.tally.pending.to_string(),
            self.tally.rejected.to_string(),
            self.tally.approved_days.to_string(),
            format.date(self.joining_date),
            capitalize(&self.status),
        ]
    }
}

/// Builds one row per employee, in employee order.
pub fn employee_rows(
    requests: &[LeaveRequest],
    employees: &[Employee],
    directory: &Directory<'_>,
) -> Vec<EmployeeRow> {
    employees
        .iter()
        .map(|employee| EmployeeRow {
            name: employee.name.clone(),
            employee_code: employee.employee_id.clone(),
            department: directory.department_name(&employee.department_id),
            position: employee.position.clone(),
            tally: StatusTally::of(requests.iter().filter(|r| r.employee_id == employee.id)),
            joining_date: employee.joining_date,
            status: employee.status.clone(),
        })
        .collect()
}
