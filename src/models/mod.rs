//! Core data models for leave-desk.
//!
//! Plain records shared by the holiday controller and the report pipeline.

mod department;
mod employee;
mod holiday;
mod ids;
mod leave_request;

pub use department::Department;
pub use employee::Employee;
pub use holiday::{Holiday, HolidayDraft};
pub use ids::{DepartmentId, EmployeeId, HolidayId};
pub use leave_request::{LeaveRequest, LeaveStatus, LeaveType};
