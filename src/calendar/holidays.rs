//! Public holiday registry.
//!
//! Holidays come from two places: a [`HolidaySource`] that supplies the
//! published table for a year, and a list of company-added custom holidays
//! owned by the [`HolidayRegistry`] instance. Both are consulted by every
//! lookup.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayEntry;

/// A provider of the published public holidays for a year.
///
/// Years the source has no table for yield an empty list rather than an
/// error: an unknown year simply has no public holidays.
pub trait HolidaySource: std::fmt::Debug + Send + Sync {
    /// Returns the holidays for `year`, in any order.
    fn holidays_for_year(&self, year: i32) -> Vec<HolidayEntry>;
}

/// Built-in national holiday tables for 2025 and 2026.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinHolidays;

const HOLIDAYS_2025: &[(u32, u32, &str)] = &[
    (1, 26, "Republic Day"),
    (3, 14, "Holi"),
    (3, 31, "Eid ul-Fitr"),
    (4, 18, "Good Friday"),
    (8, 15, "Independence Day"),
    (10, 2, "Gandhi Jayanti"),
    (10, 20, "Diwali"),
    (11, 5, "Guru Nanak Jayanti"),
    (12, 25, "Christmas"),
];

const HOLIDAYS_2026: &[(u32, u32, &str)] = &[
    (1, 26, "Republic Day"),
    (3, 4, "Holi"),
    (3, 21, "Eid ul-Fitr"),
    (4, 3, "Good Friday"),
    (8, 15, "Independence Day"),
    (10, 2, "Gandhi Jayanti"),
    (10, 20, "Dussehra"),
    (11, 8, "Diwali"),
    (11, 24, "Guru Nanak Jayanti"),
    (12, 25, "Christmas"),
];

impl HolidaySource for BuiltinHolidays {
    fn holidays_for_year(&self, year: i32) -> Vec<HolidayEntry> {
        let table = match year {
            2025 => HOLIDAYS_2025,
            2026 => HOLIDAYS_2026,
            _ => return Vec::new(),
        };
        table
            .iter()
            .filter_map(|&(month, day, name)| {
                NaiveDate::from_ymd_opt(year, month, day).map(|date| HolidayEntry::new(date, name))
            })
            .collect()
    }
}

/// Holiday tables keyed by year, typically loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayTables {
    tables: HashMap<i32, Vec<HolidayEntry>>,
}

impl HolidayTables {
    /// Creates an empty set of tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the table for `year`.
    pub fn insert_year(&mut self, year: i32, holidays: Vec<HolidayEntry>) {
        self.tables.insert(year, holidays);
    }

    /// Returns true if a table for `year` is present.
    pub fn contains_year(&self, year: i32) -> bool {
        self.tables.contains_key(&year)
    }

    /// Years that have a table, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.tables.keys().copied().collect();
        years.sort_unstable();
        years
    }
}

impl HolidaySource for HolidayTables {
    fn holidays_for_year(&self, year: i32) -> Vec<HolidayEntry> {
        self.tables.get(&year).cloned().unwrap_or_default()
    }
}

/// Answers "is this date a holiday, and what is it called".
///
/// Each registry owns its custom holiday list, so separate instances never
/// observe each other's additions. Custom holidays count as holidays for
/// every lookup, not only for [`HolidayRegistry::all_holidays`].
///
/// # Example
///
/// ```
/// use payroll_engine::calendar::HolidayRegistry;
/// use chrono::NaiveDate;
///
/// let mut registry = HolidayRegistry::builtin();
/// let independence_day = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// assert_eq!(
///     registry.public_holiday_name(independence_day).as_deref(),
///     Some("Independence Day")
/// );
///
/// let company_day = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
/// registry.add_custom_holiday(company_day, "Company Day");
/// assert!(registry.is_public_holiday(company_day));
/// ```
#[derive(Debug)]
pub struct HolidayRegistry {
    source: Box<dyn HolidaySource>,
    custom: Vec<HolidayEntry>,
}

impl HolidayRegistry {
    /// Creates a registry over the given holiday source with no custom holidays.
    pub fn new(source: impl HolidaySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            custom: Vec::new(),
        }
    }

    /// Creates a registry over the built-in tables.
    pub fn builtin() -> Self {
        Self::new(BuiltinHolidays)
    }

    /// Returns the published holidays for `year`, sorted by date.
    ///
    /// Custom holidays are not included; an unknown year yields an empty list.
    pub fn public_holidays(&self, year: i32) -> Vec<HolidayEntry> {
        let mut holidays = self.source.holidays_for_year(year);
        holidays.sort_by(|a, b| a.date.cmp(&b.date));
        holidays
    }

    /// Returns true if `date` is a published or custom holiday.
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.public_holiday_name(date).is_some()
    }

    /// Returns the holiday name for `date`, preferring the published name
    /// when a custom holiday shares the date.
    pub fn public_holiday_name(&self, date: NaiveDate) -> Option<String> {
        self.source
            .holidays_for_year(date.year())
            .into_iter()
            .find(|h| h.date == date)
            .map(|h| h.name)
            .or_else(|| {
                self.custom
                    .iter()
                    .find(|h| h.date == date)
                    .map(|h| h.name.clone())
            })
    }

    /// Adds a custom holiday. Adding a date that already has a custom
    /// holiday replaces its name.
    pub fn add_custom_holiday(&mut self, date: NaiveDate, name: impl Into<String>) {
        let name = name.into();
        info!(date = %date, name = %name, "Adding custom holiday");
        match self.custom.iter_mut().find(|h| h.date == date) {
            Some(existing) => existing.name = name,
            None => self.custom.push(HolidayEntry::new(date, name)),
        }
    }

    /// Removes the custom holiday on `date`.
    ///
    /// Returns `false` when there was nothing to remove; that is not an error.
    pub fn remove_custom_holiday(&mut self, date: NaiveDate) -> bool {
        let before = self.custom.len();
        self.custom.retain(|h| h.date != date);
        let removed = self.custom.len() != before;
        if removed {
            info!(date = %date, "Removed custom holiday");
        }
        removed
    }

    /// Returns the custom holidays in insertion order.
    pub fn custom_holidays(&self) -> &[HolidayEntry] {
        &self.custom
    }

    /// Returns published and custom holidays for `year`, ascending by date.
    pub fn all_holidays(&self, year: i32) -> Vec<HolidayEntry> {
        let mut holidays = self.source.holidays_for_year(year);
        holidays.extend(self.custom.iter().filter(|h| h.date.year() == year).cloned());
        holidays.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        holidays
    }
}

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// Malformed input is rejected here, before it can reach the registry, so
/// holiday lookups never have to treat an unparseable date as "not a holiday".
pub fn parse_calendar_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}
