//! Leave request model and its enumerations.
//!
//! This module defines the [`LeaveRequest`] record along with the closed
//! [`LeaveType`] and [`LeaveStatus`] sets the report aggregation groups by.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// The kind of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Casual leave.
    Casual,
    /// Sick leave.
    Sick,
    /// Paid (annual) leave.
    Paid,
    /// Personal leave.
    Personal,
    /// Maternity leave.
    Maternity,
    /// Paternity leave.
    Paternity,
}

impl LeaveType {
    /// Every leave type, in the order the leave-type report lists them.
    pub const ALL: [LeaveType; 6] = [
        LeaveType::Casual,
        LeaveType::Sick,
        LeaveType::Paid,
        LeaveType::Personal,
        LeaveType::Maternity,
        LeaveType::Paternity,
    ];

    /// Returns the stored lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Casual => "casual",
            LeaveType::Sick => "sick",
            LeaveType::Paid => "paid",
            LeaveType::Personal => "personal",
            LeaveType::Maternity => "maternity",
            LeaveType::Paternity => "paternity",
        }
    }
}

/// Where a leave request is in its approval lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; counts towards days used.
    Approved,
    /// Rejected.
    Rejected,
}

impl LeaveStatus {
    /// Returns the stored lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }
}

/// A leave request filed by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The employee who filed the request.
    pub employee_id: EmployeeId,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub from_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub to_date: NaiveDate,
    /// Number of leave days charged.
    pub days_count: u32,
    /// Approval status.
    pub status: LeaveStatus,
    /// When the request was filed.
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Returns true if the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Returns the days charged if approved, zero otherwise.
    pub fn approved_days(&self) -> u32 {
        if self.is_approved() { self.days_count } else { 0 }
    }
}
