//! Display formatting for report cells.

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::config::ExportConfig;

/// Date format used when a configured one is unusable.
pub const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// How dates are rendered inside report cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormat {
    date_format: String,
}

impl ReportFormat {
    /// Creates a format from a `chrono` strftime string.
    ///
    /// An invalid string is replaced by [`FALLBACK_DATE_FORMAT`], since
    /// rendering with it would panic.
    pub fn new(date_format: impl Into<String>) -> Self {
        let date_format = date_format.into();
        let valid = StrftimeItems::new(&date_format).all(|item| !matches!(item, Item::Error));
        if valid {
            Self { date_format }
        } else {
            warn!(date_format = %date_format, "Invalid date format, using ISO dates");
            Self {
                date_format: FALLBACK_DATE_FORMAT.to_string(),
            }
        }
    }

    /// Renders a date.
    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self::new("%-m/%-d/%Y")
    }
}

impl From<&ExportConfig> for ReportFormat {
    fn from(config: &ExportConfig) -> Self {
        Self::new(config.date_format.clone())
    }
}

/// Upper-cases the first character, leaving the rest untouched.
///
/// ```
/// use leave_desk::reports::capitalize;
///
/// assert_eq!(capitalize("sick"), "Sick");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders `numerator / denominator` with one decimal place, or `"0"` when
/// the denominator is zero.
///
/// ```
/// use leave_desk::reports::ratio_one_decimal;
///
/// assert_eq!(ratio_one_decimal(7, 2), "3.5");
/// assert_eq!(ratio_one_decimal(2, 3), "0.7");
/// assert_eq!(ratio_one_decimal(4, 0), "0");
/// ```
pub fn ratio_one_decimal(numerator: u64, denominator: u64) -> String {
    if denominator == 0 {
        return "0".to_string();
    }
    one_decimal(Decimal::from(numerator) / Decimal::from(denominator))
}

/// Renders `part / whole` as a percentage with one decimal place, or `"0%"`
/// when `whole` is zero.
///
/// ```
/// use leave_desk::reports::percentage;
///
/// assert_eq!(percentage(1, 3), "33.3%");
/// assert_eq!(percentage(0, 0), "0%");
/// ```
pub fn percentage(part: u64, whole: u64) -> String {
    if whole == 0 {
        return "0%".to_string();
    }
    let rate = Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole);
    format!("{}%", one_decimal(rate))
}

fn one_decimal(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    rounded.to_string()
}
