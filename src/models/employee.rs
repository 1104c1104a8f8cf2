//! Employee model.
//!
//! This module defines the [`Employee`] record as it is read by the report
//! aggregation. Employees are never mutated by this crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DepartmentId, EmployeeId};

/// An employee who can file leave requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Internal record identifier, referenced by leave requests.
    pub id: EmployeeId,
    /// Human-readable employee code (e.g., "E001").
    pub employee_id: String,
    /// Full name.
    pub name: String,
    /// The department the employee belongs to.
    pub department_id: DepartmentId,
    /// Job title.
    pub position: String,
    /// The date the employee joined.
    pub joining_date: NaiveDate,
    /// Employment status as stored (e.g., "active", "inactive").
    pub status: String,
}

impl Employee {
    /// Returns true if the employee belongs to the given department.
    pub fn is_in(&self, department: &DepartmentId) -> bool {
        &self.department_id == department
    }
}
