//! The leave type report: one row per leave type that has requests.

use crate::models::{LeaveRequest, LeaveType};

use super::format::{ReportFormat, capitalize, percentage, ratio_one_decimal};
use super::projection::ReportRecord;
use super::tally::StatusTally;

/// Report title.
pub const LEAVE_TYPE_TITLE: &str = "Leave Type Analysis Report";

/// Filename stem.
pub const LEAVE_TYPE_FILENAME: &str = "leave_type_report";

/// Leave statistics for one leave type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveTypeRow {
    /// The leave type.
    pub leave_type: LeaveType,
    /// Counts over requests of this type.
    pub tally: StatusTally,
}

impl LeaveTypeRow {
    /// Days per request across every status, one decimal.
    pub fn average_days_per_request(&self) -> String {
        ratio_one_decimal(self.tally.requested_days, self.tally.total)
    }

    /// Approved share of requests, e.g. `"66.7%"`.
    pub fn approval_rate(&self) -> String {
        percentage(self.tally.approved, self.tally.total)
    }
}

impl ReportRecord for LeaveTypeRow {
    const HEADERS: &'static [&'static str] = &[
        "Leave Type",
        "Total Requests",
        "Approved",
        "Pending",
        "Rejected",
        "Total Days",
        "Avg Days per Request",
        "Approval Rate",
    ];

    fn cells(&self, _format: &ReportFormat) -> Vec<String> {
        vec![
            capitalize(self.leave_type.as_str()),
            self.tally.total.to_string(),
            self.tally.approved.to_string(),
            self.tally.pending.to_string(),
            self.tally.rejected.to_string(),
            self.tally.approved_days.to_string(),
            self.average_days_per_request(),
            self.approval_rate(),
        ]
    }
}

/// Builds rows in [`LeaveType::ALL`] order, dropping types with no requests.
pub fn leave_type_rows(requests: &[LeaveRequest]) -> Vec<LeaveTypeRow> {
    LeaveType::ALL
        .iter()
        .map(|&leave_type| LeaveTypeRow {
            leave_type,
            tally: StatusTally::of(requests.iter().filter(|r| r.leave_type == leave_type)),
        })
        .filter(|row| row.tally.total > 0)
        .collect()
}
