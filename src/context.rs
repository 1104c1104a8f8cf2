//! The in-memory data context.
//!
//! [`DataContext`] owns the holiday collection (mutated through the
//! [`HolidayStore`] trait) and the employee, department and leave request
//! collections that the report pipeline reads.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{LeaveError, LeaveResult};
use crate::models::{Department, Employee, Holiday, HolidayDraft, HolidayId, LeaveRequest};

/// CRUD access to the holiday collection, keyed by id.
pub trait HolidayStore {
    /// Returns every holiday in insertion order.
    fn holidays(&self) -> &[Holiday];

    /// Stores a new holiday under a freshly generated id and returns it.
    fn add_holiday(&mut self, draft: HolidayDraft) -> Holiday;

    /// Overwrites the holiday with the given id.
    fn update_holiday(&mut self, id: &HolidayId, draft: HolidayDraft) -> LeaveResult<Holiday>;

    /// Removes the holiday with the given id and returns it.
    fn delete_holiday(&mut self, id: &HolidayId) -> LeaveResult<Holiday>;

    /// Looks up a holiday by id.
    fn find_holiday(&self, id: &HolidayId) -> Option<&Holiday> {
        self.holidays().iter().find(|h| &h.id == id)
    }
}

/// Borrowed, read-only view of the records reports are built from.
#[derive(Debug, Clone, Copy)]
pub struct LeaveRecords<'a> {
    /// Leave requests.
    pub leave_requests: &'a [LeaveRequest],
    /// Employees.
    pub employees: &'a [Employee],
    /// Departments.
    pub departments: &'a [Department],
}

/// In-memory collections of every record the crate works with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DataContext {
    holidays: Vec<Holiday>,
    employees: Vec<Employee>,
    departments: Vec<Department>,
    leave_requests: Vec<LeaveRequest>,
}

impl DataContext {
    /// Creates a context from explicit collections.
    pub fn new(
        holidays: Vec<Holiday>,
        employees: Vec<Employee>,
        departments: Vec<Department>,
        leave_requests: Vec<LeaveRequest>,
    ) -> Self {
        Self {
            holidays,
            employees,
            departments,
            leave_requests,
        }
    }

    /// Loads a context from a YAML seed file.
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> LeaveResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LeaveError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let context: DataContext =
            serde_yaml::from_str(&content).map_err(|e| LeaveError::SeedParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        info!(
            path = %path_str,
            holidays = context.holidays.len(),
            employees = context.employees.len(),
            departments = context.departments.len(),
            leave_requests = context.leave_requests.len(),
            "Seeded data context"
        );
        Ok(context)
    }

    /// Returns the employees.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the departments.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Returns the leave requests.
    pub fn leave_requests(&self) -> &[LeaveRequest] {
        &self.leave_requests
    }

    /// Returns a read-only view for report aggregation.
    pub fn records(&self) -> LeaveRecords<'_> {
        LeaveRecords {
            leave_requests: &self.leave_requests,
            employees: &self.employees,
            departments: &self.departments,
        }
    }
}

impl HolidayStore for DataContext {
    fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    fn add_holiday(&mut self, draft: HolidayDraft) -> Holiday {
        let holiday = Holiday::from_draft(HolidayId::generate(), draft);
        info!(id = %holiday.id, name = %holiday.name, date = %holiday.date, "Holiday added");
        self.holidays.push(holiday.clone());
        holiday
    }

    fn update_holiday(&mut self, id: &HolidayId, draft: HolidayDraft) -> LeaveResult<Holiday> {
        let holiday = self
            .holidays
            .iter_mut()
            .find(|h| &h.id == id)
            .ok_or_else(|| LeaveError::HolidayNotFound { id: id.to_string() })?;

        holiday.apply(draft);
        info!(id = %holiday.id, name = %holiday.name, date = %holiday.date, "Holiday updated");
        Ok(holiday.clone())
    }

    fn delete_holiday(&mut self, id: &HolidayId) -> LeaveResult<Holiday> {
        let index = self
            .holidays
            .iter()
            .position(|h| &h.id == id)
            .ok_or_else(|| LeaveError::HolidayNotFound { id: id.to_string() })?;

        let removed = self.holidays.remove(index);
        info!(id = %removed.id, name = %removed.name, "Holiday deleted");
        Ok(removed)
    }
}
