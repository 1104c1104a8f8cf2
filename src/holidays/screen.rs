//! The holiday administration screen.
//!
//! [`HolidayScreen`] holds the state of the form, the pending deletion and
//! the import dialog on top of a [`HolidayStore`], and turns user actions
//! into store mutations.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{debug, info};

use super::form::HolidayForm;
use super::import::{ImportFile, ImportKind, StubImporter};
use super::notify::Toast;
use crate::context::HolidayStore;
use crate::error::{LeaveError, LeaveResult};
use crate::models::{Holiday, HolidayId};

/// Prompt shown before a holiday is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this holiday?";

/// Placeholder for holidays without a description.
pub const NO_DESCRIPTION: &str = "-";

/// One line of the holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayListing {
    /// The holiday itself.
    #[serde(flatten)]
    pub holiday: Holiday,
    /// The holiday falls on today.
    pub is_today: bool,
    /// The holiday is strictly before today.
    pub is_past: bool,
    /// Full weekday name.
    pub weekday: &'static str,
    /// The description, or "-".
    pub description_label: String,
}

/// Counts shown under the holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HolidaySummary {
    /// Number of holidays.
    pub total: usize,
    /// Holidays strictly after today.
    pub upcoming: usize,
    /// The year of today.
    pub current_year: i32,
}

/// Lists holidays ascending by date, flagging today and past dates.
///
/// Holidays on the same date keep their stored order.
pub fn holiday_listing(holidays: &[Holiday], today: NaiveDate) -> Vec<HolidayListing> {
    let mut sorted: Vec<&Holiday> = holidays.iter().collect();
    sorted.sort_by_key(|h| h.date);

    sorted
        .into_iter()
        .map(|holiday| HolidayListing {
            is_today: holiday.date == today,
            is_past: holiday.date < today,
            weekday: holiday.weekday_name(),
            description_label: holiday
                .description
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            holiday: holiday.clone(),
        })
        .collect()
}

/// Summarizes the holiday collection as of today.
pub fn holiday_summary(holidays: &[Holiday], today: NaiveDate) -> HolidaySummary {
    HolidaySummary {
        total: holidays.len(),
        upcoming: holidays.iter().filter(|h| h.date > today).count(),
        current_year: today.year(),
    }
}

/// Controller for the holiday screen.
pub struct HolidayScreen<S: HolidayStore> {
    store: S,
    importer: StubImporter,
    form: HolidayForm,
    form_open: bool,
    editing: Option<HolidayId>,
    pending_delete: Option<HolidayId>,
    import_dialog: Option<ImportKind>,
}

impl<S: HolidayStore> HolidayScreen<S> {
    /// Creates a screen over a store.
    pub fn new(store: S, importer: StubImporter) -> Self {
        Self {
            store,
            importer,
            form: HolidayForm::default(),
            form_open: false,
            editing: None,
            pending_delete: None,
            import_dialog: None,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the current form fields.
    pub fn form(&self) -> &HolidayForm {
        &self.form
    }

    /// Returns the form fields for editing.
    pub fn form_mut(&mut self) -> &mut HolidayForm {
        &mut self.form
    }

    /// Returns true while the form is shown.
    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// The id of the holiday being edited, if any.
    pub fn editing(&self) -> Option<&HolidayId> {
        self.editing.as_ref()
    }

    /// Form heading for the current mode.
    pub fn form_heading(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Holiday"
        } else {
            "Add New Holiday"
        }
    }

    /// Opens an empty form for a new holiday.
    pub fn open_form(&mut self) {
        self.form = HolidayForm::default();
        self.editing = None;
        self.form_open = true;
    }

    /// Opens the form pre-filled with an existing holiday.
    pub fn begin_edit(&mut self, id: &HolidayId) -> LeaveResult<()> {
        let holiday = self
            .store
            .find_holiday(id)
            .ok_or_else(|| LeaveError::HolidayNotFound { id: id.to_string() })?;

        self.form = HolidayForm::from_holiday(holiday);
        self.editing = Some(id.clone());
        self.form_open = true;
        Ok(())
    }

    /// Clears and closes the form, leaving edit mode.
    pub fn cancel_form(&mut self) {
        self.form = HolidayForm::default();
        self.editing = None;
        self.form_open = false;
    }

    /// Creates or updates a holiday from the form.
    ///
    /// On success the form is cleared and closed. A validation failure
    /// leaves the form untouched.
    pub fn submit(&mut self) -> LeaveResult<Holiday> {
        let draft = self.form.validate()?;

        let holiday = match &self.editing {
            Some(id) => self.store.update_holiday(id, draft)?,
            None => self.store.add_holiday(draft),
        };

        self.cancel_form();
        Ok(holiday)
    }

    /// Asks for confirmation before deleting a holiday.
    ///
    /// Returns the prompt to show.
    pub fn request_delete(&mut self, id: &HolidayId) -> LeaveResult<&'static str> {
        if self.store.find_holiday(id).is_none() {
            return Err(LeaveError::HolidayNotFound { id: id.to_string() });
        }
        debug!(id = %id, "Deletion awaiting confirmation");
        self.pending_delete = Some(id.clone());
        Ok(DELETE_CONFIRMATION)
    }

    /// The holiday awaiting deletion, if any.
    pub fn pending_delete(&self) -> Option<&HolidayId> {
        self.pending_delete.as_ref()
    }

    /// Deletes the holiday awaiting confirmation.
    pub fn confirm_delete(&mut self) -> LeaveResult<Holiday> {
        let id = self.pending_delete.take().ok_or_else(|| LeaveError::NoPendingAction {
            action: "deletion".to_string(),
        })?;

        let removed = self.store.delete_holiday(&id)?;
        if self.editing.as_ref() == Some(&id) {
            self.cancel_form();
        }
        Ok(removed)
    }

    /// Drops the pending deletion.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Sorted table rows as of today.
    pub fn listing(&self, today: NaiveDate) -> Vec<HolidayListing> {
        holiday_listing(self.store.holidays(), today)
    }

    /// Summary counts as of today.
    pub fn summary(&self, today: NaiveDate) -> HolidaySummary {
        holiday_summary(self.store.holidays(), today)
    }

    /// Opens the import dialog for a file kind.
    pub fn open_import(&mut self, kind: ImportKind) {
        self.import_dialog = Some(kind);
    }

    /// The kind the import dialog is open for, if it is open.
    pub fn import_dialog(&self) -> Option<ImportKind> {
        self.import_dialog
    }

    /// Closes the import dialog without importing.
    pub fn close_import(&mut self) {
        self.import_dialog = None;
    }

    /// Hands a picked file to the importer and closes the dialog.
    ///
    /// A rejected file leaves the dialog open.
    pub fn select_import_file(&mut self, file: &ImportFile) -> LeaveResult<Toast> {
        let kind = self.import_dialog.ok_or_else(|| LeaveError::NoPendingAction {
            action: "import".to_string(),
        })?;

        let toast = self.importer.import(kind, file)?;
        info!(kind = ?kind, file_name = %file.file_name, "Import scheduled");
        self.import_dialog = None;
        Ok(toast)
    }
}
