//! Holiday administration.
//!
//! The [`HolidayScreen`] controller drives create, edit and confirmed delete
//! of company holidays over any [`HolidayStore`](crate::context::HolidayStore),
//! lists them by date and offers the stub Excel/PDF import.

mod form;
mod import;
mod notify;
mod screen;

pub use form::HolidayForm;
pub use import::{ImportFile, ImportKind, StubImporter};
pub use notify::{ChannelNotifier, Notifier, Toast, ToastKind, TracingNotifier};
pub use screen::{
    DELETE_CONFIRMATION, HolidayListing, HolidayScreen, HolidaySummary, NO_DESCRIPTION,
    holiday_listing, holiday_summary,
};
