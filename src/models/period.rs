//! Pay month model.
//!
//! This module contains the [`PayMonth`] type, the calendar month every
//! salary and working-day calculation is scoped to.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A validated calendar month (year plus month number 1-12).
///
/// Construction through [`PayMonth::new`] guarantees that the first and last
/// day of the month are representable, so the accessors never fail.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayMonth;
/// use chrono::NaiveDate;
///
/// let april = PayMonth::new(2025, 4).unwrap();
/// assert_eq!(april.days_in_month(), 30);
/// assert_eq!(april.first_day(), NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
/// assert!(PayMonth::new(2025, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPayMonth")]
pub struct PayMonth {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawPayMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawPayMonth> for PayMonth {
    type Error = EngineError;

    fn try_from(raw: RawPayMonth) -> EngineResult<Self> {
        PayMonth::new(raw.year, raw.month)
    }
}

impl PayMonth {
    /// Creates a pay month, rejecting month numbers outside 1-12 and years
    /// outside the range chrono can represent.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod {
                year,
                month,
                message: "month must be between 1 and 12".to_string(),
            });
        }

        // The day after the month must exist too, otherwise last_day() has no anchor.
        if NaiveDate::from_ymd_opt(year, month, 1).is_none()
            || first_of_next_month(year, month).is_none()
        {
            return Err(EngineError::InvalidPeriod {
                year,
                month,
                message: "year is outside the supported calendar range".to_string(),
            });
        }

        Ok(Self { year, month })
    }

    /// Returns the pay month containing `date`.
    pub fn containing(date: NaiveDate) -> EngineResult<Self> {
        Self::new(date.year(), date.month())
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number, 1 (January) to 12 (December).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        first_of_next_month(self.year, self.month)
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Number of calendar days in the month.
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Returns true if `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

fn first_of_next_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month == 12 {
        year.checked_add(1).and_then(|next| NaiveDate::from_ymd_opt(next, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
}

impl std::fmt::Display for PayMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
