//! Working-day enumeration.
//!
//! This module walks the days of a month (or an arbitrary inclusive range)
//! and filters them through the week-off rule. Public holidays are not
//! excluded from working days here; [`month_summary`] reports them
//! separately for display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PayMonth;

use super::{HolidayRegistry, is_week_off};

/// The classification of a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Attendance is expected.
    Working,
    /// Sunday or a non-working Saturday.
    WeekOff,
    /// A published or custom holiday falling on an otherwise-working day.
    PublicHoliday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Working => write!(f, "Working"),
            DayType::WeekOff => write!(f, "Week off"),
            DayType::PublicHoliday => write!(f, "Public holiday"),
        }
    }
}

/// One day of a [`MonthSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// The calendar date.
    pub date: NaiveDate,
    /// How the date is classified.
    pub day_type: DayType,
    /// The holiday name, if the date is a holiday (even on a week-off).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
}

/// Attendance-calendar view of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The month summarized.
    pub period: PayMonth,
    /// Calendar days in the month.
    pub total_days: u32,
    /// Days that are not week-offs (public holidays included).
    pub working_days: u32,
    /// Sundays and non-working Saturdays.
    pub week_off_days: u32,
    /// Holidays that fall on otherwise-working days.
    pub public_holidays: u32,
    /// Per-day classification, ascending by date.
    pub days: Vec<DayClassification>,
}

/// Returns every date of the month, from the 1st to the last day, ascending.
pub fn all_dates_in_month(period: PayMonth) -> Vec<NaiveDate> {
    period
        .first_day()
        .iter_days()
        .take_while(|d| *d <= period.last_day())
        .collect()
}

/// Returns the dates of the month that are not week-offs, ascending.
///
/// # Example
///
/// ```
/// use payroll_engine::calendar::working_days_in_month;
/// use payroll_engine::models::PayMonth;
///
/// // April 2025: 30 days, 4 Sundays and the 2nd/4th Saturdays off.
/// let days = working_days_in_month(PayMonth::new(2025, 4).unwrap());
/// assert_eq!(days.len(), 24);
/// ```
pub fn working_days_in_month(period: PayMonth) -> Vec<NaiveDate> {
    all_dates_in_month(period)
        .into_iter()
        .filter(|d| !is_week_off(*d))
        .collect()
}

/// Counts the non-week-off days from `start` to `end`, both inclusive.
///
/// Returns 0 when `start` is after `end`.
pub fn count_working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !is_week_off(*d))
        .count() as u32
}

/// Classifies `date`. A week-off stays a week-off even if it is also a holiday.
pub fn classify_day(date: NaiveDate, registry: &HolidayRegistry) -> DayType {
    if is_week_off(date) {
        DayType::WeekOff
    } else if registry.is_public_holiday(date) {
        DayType::PublicHoliday
    } else {
        DayType::Working
    }
}

/// Builds the attendance-calendar summary for a month.
pub fn month_summary(period: PayMonth, registry: &HolidayRegistry) -> MonthSummary {
    let days: Vec<DayClassification> = all_dates_in_month(period)
        .into_iter()
        .map(|date| DayClassification {
            date,
            day_type: classify_day(date, registry),
            holiday_name: registry.public_holiday_name(date),
        })
        .collect();

    let count = |day_type: DayType| days.iter().filter(|d| d.day_type == day_type).count() as u32;
    let week_off_days = count(DayType::WeekOff);
    let public_holidays = count(DayType::PublicHoliday);

    MonthSummary {
        period,
        total_days: days.len() as u32,
        working_days: days.len() as u32 - week_off_days,
        week_off_days,
        public_holidays,
        days,
    }
}
