//! The department report: one row per department.

use std::collections::HashSet;

use crate::models::{Department, Employee, LeaveRequest};

use super::format::{ReportFormat, ratio_one_decimal};
use super::projection::ReportRecord;
use super::tally::StatusTally;

/// Report title.
pub const DEPARTMENT_TITLE: &str = "Department-wise Leave Report";

/// Filename stem.
pub const DEPARTMENT_FILENAME: &str = "department_leave_report";

/// Leave statistics for one department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRow {
    /// Department name.
    pub department: String,
    /// Employees assigned to the department.
    pub employee_count: u64,
    /// Counts over requests filed by those employees.
    pub tally: StatusTally,
}

impl DepartmentRow {
    /// Approved days per employee, one decimal, `"0"` for an empty department.
    pub fn average_days_per_employee(&self) -> String {
        ratio_one_decimal(self.tally.approved_days, self.employee_count)
    }
}

impl ReportRecord for DepartmentRow {
    const HEADERS: &'static [&'static str] = &[
        "Department",
        "Total Employees",
        "Total Requests",
        "Approved",
        "Pending",
        "Rejected",
        "Total Days Approved",
        "Avg Days per Employee",
    ];

    fn cells(&self, _format: &ReportFormat) -> Vec<String> {
        vec![
            self.department.clone(),
            self.employee_count.to_string(),
            self.tally.total.to_string(),
            self.tally.approved.to_string(),
            self.tally.pending.to_string(),
            self.tally.rejected.to_string(),
            self.tally.approved_days.to_string(),
            self.average_days_per_employee(),
        ]
    }
}

/// Builds one row per department, in department order.
pub fn department_rows(
    requests: &[LeaveRequest],
    employees: &[Employee],
    departments: &[Department],
) -> Vec<DepartmentRow> {
    departments
        .iter()
        .map(|department| {
            let members: Vec<&Employee> = employees
                .iter()
                .filter(|e| e.is_in(&department.id))
                .collect();
            let member_ids: HashSet<_> = members.iter().map(|e| &e.id).collect();
            let tally = StatusTally::of(
                requests
                    .iter()
                    .filter(|request| member_ids.contains(&request.employee_id)),
            );

            DepartmentRow {
                department: department.name.clone(),
                employee_count: members.len() as u64,
                tally,
            }
        })
        .collect()
}
