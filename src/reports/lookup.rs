//! Foreign-key lookups with placeholder fallback.

use std::collections::HashMap;

use crate::models::{Department, DepartmentId, Employee, EmployeeId};

/// Placeholder shown when a referenced record does not exist.
pub const UNKNOWN: &str = "Unknown";

/// Id-indexed views over employees and departments.
///
/// When ids repeat, the first record wins, matching a linear search.
#[derive(Debug)]
pub struct Directory<'a> {
    employees: HashMap<&'a EmployeeId, &'a Employee>,
    departments: HashMap<&'a DepartmentId, &'a Department>,
}

impl<'a> Directory<'a> {
    /// Indexes the given collections.
    pub fn new(employees: &'a [Employee], departments: &'a [Department]) -> Self {
        let mut employee_index = HashMap::with_capacity(employees.len());
        for employee in employees {
            employee_index.entry(&employee.id).or_insert(employee);
        }

        let mut department_index = HashMap::with_capacity(departments.len());
        for department in departments {
            department_index.entry(&department.id).or_insert(department);
        }

        Self {
            employees: employee_index,
            departments: department_index,
        }
    }

    /// Looks up an employee.
    pub fn employee(&self, id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.get(id).copied()
    }

    /// Looks up a department.
    pub fn department(&self, id: &DepartmentId) -> Option<&'a Department> {
        self.departments.get(id).copied()
    }

    /// Resolves a department name, or [`UNKNOWN`].
    pub fn department_name(&self, id: &DepartmentId) -> String {
        self.department(id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}
