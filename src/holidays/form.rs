//! The holiday form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LeaveError, LeaveResult};
use crate::models::{Holiday, HolidayDraft};

/// Raw form fields, exactly as entered.
///
/// `date` is expected as `YYYY-MM-DD`, the value a date input produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayForm {
    /// Holiday name. Required.
    pub name: String,
    /// Holiday date. Required.
    pub date: String,
    /// Free-text description. Optional.
    #[serde(default)]
    pub description: String,
}

impl HolidayForm {
    /// Pre-fills the form from an existing holiday.
    pub fn from_holiday(holiday: &Holiday) -> Self {
        Self {
            name: holiday.name.clone(),
            date: holiday.date.format("%Y-%m-%d").to_string(),
            description: holiday.description.clone().unwrap_or_default(),
        }
    }

    /// Checks the required fields and converts the form into a draft.
    ///
    /// A blank description becomes `None`.
    pub fn validate(&self) -> LeaveResult<HolidayDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(invalid("name", "is required"));
        }

        let date = self.date.trim();
        if date.is_empty() {
            return Err(invalid("date", "is required"));
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| invalid("date", &format!("'{date}' is not a YYYY-MM-DD date ({e})")))?;

        let description = self.description.trim();
        Ok(HolidayDraft {
            name: name.to_string(),
            date,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

fn invalid(field: &str, message: &str) -> LeaveError {
    LeaveError::InvalidHoliday {
        field: field.to_string(),
        message: message.to_string(),
    }
}
