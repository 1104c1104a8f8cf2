//! Report type selection.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The closed set of leave reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    /// One row per leave request.
    #[default]
    Overview,
    /// One row per department.
    Department,
    /// One row per employee.
    Employee,
    /// One row per leave type with at least one request.
    LeaveType,
}

impl ReportType {
    /// Every report type.
    pub const ALL: [ReportType; 4] = [
        ReportType::Overview,
        ReportType::Department,
        ReportType::Employee,
        ReportType::LeaveType,
    ];

    /// Resolves a report name, falling back to [`ReportType::Overview`] for
    /// anything unrecognised.
    ///
    /// ```
    /// use leave_desk::reports::ReportType;
    ///
    /// assert_eq!(ReportType::from_name("leave-type"), ReportType::LeaveType);
    /// assert_eq!(ReportType::from_name("payroll"), ReportType::Overview);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "overview" => ReportType::Overview,
            "department" => ReportType::Department,
            "employee" => ReportType::Employee,
            "leave-type" => ReportType::LeaveType,
            other => {
                debug!(report_type = %other, "Unknown report type, using overview");
                ReportType::Overview
            }
        }
    }

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Overview => "overview",
            ReportType::Department => "department",
            ReportType::Employee => "employee",
            ReportType::LeaveType => "leave-type",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
