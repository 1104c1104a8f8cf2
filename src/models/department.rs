//! Department model.

use serde::{Deserialize, Serialize};

use super::DepartmentId;

/// An organisational department employees belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier.
    pub id: DepartmentId,
    /// Display name.
    pub name: String,
}
