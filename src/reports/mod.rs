//! Report aggregation for leave-desk.
//!
//! This module joins and aggregates leave requests, employees and
//! departments into a [`ReportProjection`] for one of four report types:
//! a per-request overview, and per-department, per-employee and
//! per-leave-type statistics.
//!
//! # Example
//!
//! ```
//! use leave_desk::reports::{prepare_report, ReportFormat, ReportType};
//!
//! let projection = prepare_report(ReportType::LeaveType, &[], &[], &[], &ReportFormat::default());
//! assert_eq!(projection.title, "Leave Type Analysis Report");
//! assert!(projection.rows.is_empty());
//! ```

mod department;
mod employee;
mod format;
mod leave_type;
mod lookup;
mod overview;
mod projection;
mod report_type;
mod tally;

pub use department::{DEPARTMENT_FILENAME, DEPARTMENT_TITLE, DepartmentRow, department_rows};
pub use employee::{EMPLOYEE_FILENAME, EMPLOYEE_TITLE, EmployeeRow, employee_rows};
pub use format::{FALLBACK_DATE_FORMAT, ReportFormat, capitalize, percentage, ratio_one_decimal};
pub use leave_type::{LEAVE_TYPE_FILENAME, LEAVE_TYPE_TITLE, LeaveTypeRow, leave_type_rows};
pub use lookup::{Directory, UNKNOWN};
pub use overview::{OVERVIEW_FILENAME, OVERVIEW_TITLE, OverviewRow, overview_rows};
pub use projection::{ReportProjection, ReportRecord, ReportRow};
pub use report_type::ReportType;
pub use tally::StatusTally;

use tracing::debug;

use crate::context::LeaveRecords;
use crate::models::{Department, Employee, LeaveRequest};

/// Builds the projection for a report type.
///
/// Missing employee or department references degrade to "Unknown"; averages
/// and rates over empty groups render as `"0"` / `"0%"`. Nothing here fails.
pub fn prepare_report(
    report_type: ReportType,
    leave_requests: &[LeaveRequest],
    employees: &[Employee],
    departments: &[Department],
    format: &ReportFormat,
) -> ReportProjection {
    let directory = Directory::new(employees, departments);

    let projection = match report_type {
        ReportType::Overview => ReportProjection::from_records(
            OVERVIEW_TITLE,
            OVERVIEW_FILENAME,
            &overview_rows(leave_requests, &directory),
            format,
        ),
        ReportType::Department => ReportProjection::from_records(
            DEPARTMENT_TITLE,
            DEPARTMENT_FILENAME,
            &department_rows(leave_requests, employees, departments),
            format,
        ),
        ReportType::Employee => ReportProjection::from_records(
            EMPLOYEE_TITLE,
            EMPLOYEE_FILENAME,
            &employee_rows(leave_requests, employees, &directory),
            format,
        ),
        ReportType::LeaveType => ReportProjection::from_records(
            LEAVE_TYPE_TITLE,
            LEAVE_TYPE_FILENAME,
            &leave_type_rows(leave_requests),
            format,
        ),
    };

    debug!(
        report_type = %report_type,
        rows = projection.rows.len(),
        "Prepared report"
    );
    projection
}

/// Builds a projection from a borrowed record view.
pub fn prepare_report_from(
    report_type: ReportType,
    records: LeaveRecords<'_>,
    format: &ReportFormat,
) -> ReportProjection {
    prepare_report(
        report_type,
        records.leave_requests,
        records.employees,
        records.departments,
        format,
    )
}

/// Builds a projection from a report name; unknown names give the overview.
pub fn prepare_report_by_name(
    name: &str,
    records: LeaveRecords<'_>,
    format: &ReportFormat,
) -> ReportProjection {
    prepare_report_from(ReportType::from_name(name), records, format)
}
