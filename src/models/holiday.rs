//! Holiday entry model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named holiday on a single calendar date.
///
/// # Example
///
/// ```
/// use payroll_engine::models::HolidayEntry;
/// use chrono::NaiveDate;
///
/// let holiday = HolidayEntry::new(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(), "Independence Day");
/// assert_eq!(holiday.name, "Independence Day");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Republic Day").
    pub name: String,
}

impl HolidayEntry {
    /// Creates a holiday entry.
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}
