//! Company holiday model.
//!
//! This module defines the [`Holiday`] record and the [`HolidayDraft`] used to
//! create or overwrite one.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::HolidayId;

/// A company holiday.
///
/// # Example
///
/// ```
/// use leave_desk::models::{Holiday, HolidayId};
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     id: HolidayId::new("h1"),
///     name: "New Year's Day".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     description: None,
/// };
/// assert_eq!(holiday.weekday_name(), "Thursday");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Unique identifier.
    pub id: HolidayId,
    /// Display name (e.g., "New Year's Day").
    pub name: String,
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The editable fields of a holiday, without its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayDraft {
    /// Display name.
    pub name: String,
    /// The calendar date.
    pub date: NaiveDate,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Holiday {
    /// Builds a holiday from a draft under the given id.
    pub fn from_draft(id: HolidayId, draft: HolidayDraft) -> Self {
        Self {
            id,
            name: draft.name,
            date: draft.date,
            description: draft.description,
        }
    }

    /// Overwrites every editable field with the draft's values.
    pub fn apply(&mut self, draft: HolidayDraft) {
        self.name = draft.name;
        self.date = draft.date;
        self.description = draft.description;
    }

    /// Returns the full English weekday name of the holiday's date.
    pub fn weekday_name(&self) -> &'static str {
        match self.date.weekday() {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}
