//! Calendar logic for the payroll engine.
//!
//! This module contains the week-off rule (alternating Saturdays), the public
//! holiday registry with its pluggable holiday sources, and the working-day
//! enumeration that the salary calculations are built on.

mod holidays;
mod rules;
mod working_days;

pub use holidays::{
    BuiltinHolidays, HolidayRegistry, HolidaySource, HolidayTables, parse_calendar_date,
};
pub use rules::{
    WORKING_SATURDAY_WEEKS, is_saturday, is_saturday_working_day, is_sunday, is_week_off,
    is_working_day, week_of_month,
};
pub use working_days::{
    DayClassification, DayType, MonthSummary, all_dates_in_month, classify_day,
    count_working_days, month_summary, working_days_in_month,
};
