//! Week-off detection.
//!
//! This module classifies calendar dates under the office's alternating
//! Saturday rule: Sundays are always off, the 1st and 3rd Saturday of a month
//! are working days, and every other Saturday (2nd, 4th and a possible 5th)
//! is off.

use chrono::{Datelike, NaiveDate, Weekday};

/// Week-of-month numbers on which Saturday is a working day.
pub const WORKING_SATURDAY_WEEKS: [u32; 2] = [1, 3];

/// Returns true if `date` is a Saturday.
pub fn is_saturday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sat
}

/// Returns true if `date` is a Sunday.
pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// Returns the week-of-month number (1-based) for a date.
///
/// Weeks run Sunday to Saturday, with week 1 being the (possibly partial)
/// week containing the 1st. Computed as
/// `ceil((day_of_month + weekday_of_first) / 7)` with Sunday = 0, so the
/// result ranges from 1 to at most 6. Under this numbering the 1st Saturday
/// of a month always falls in week 1.
///
/// # Example
///
/// ```
/// use payroll_engine::calendar::week_of_month;
/// use chrono::NaiveDate;
///
/// // April 2025 starts on a Tuesday.
/// assert_eq!(week_of_month(NaiveDate::from_ymd_opt(2025, 4, 5).unwrap()), 1);
/// assert_eq!(week_of_month(NaiveDate::from_ymd_opt(2025, 4, 6).unwrap()), 2);
/// assert_eq!(week_of_month(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()), 5);
/// ```
pub fn week_of_month(date: NaiveDate) -> u32 {
    let first_weekday = date
        .with_day(1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0);
    (date.day() + first_weekday).div_ceil(7)
}

/// Returns true if `date` is a Saturday that must be worked (1st or 3rd).
pub fn is_saturday_working_day(date: NaiveDate) -> bool {
    is_saturday(date) && WORKING_SATURDAY_WEEKS.contains(&week_of_month(date))
}

/// Returns true if `date` is a week-off day.
///
/// A week-off is any Sunday, or any Saturday that is not a working Saturday.
/// Public holidays are a separate concept and are not considered here.
///
/// # Example
///
/// ```
/// use payroll_engine::calendar::is_week_off;
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2025, 4, d).unwrap();
/// assert!(!is_week_off(date(5)));  // 1st Saturday
/// assert!(is_week_off(date(6)));   // Sunday
/// assert!(is_week_off(date(12)));  // 2nd Saturday
/// assert!(!is_week_off(date(19))); // 3rd Saturday
/// assert!(is_week_off(date(26)));  // 4th Saturday
/// ```
pub fn is_week_off(date: NaiveDate) -> bool {
    is_sunday(date) || (is_saturday(date) && !is_saturday_working_day(date))
}

/// Returns true if attendance is expected on `date` (not a week-off).
pub fn is_working_day(date: NaiveDate) -> bool {
    !is_week_off(date)
}
