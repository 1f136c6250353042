//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll rules
//! and holiday tables from YAML files.

use chrono::Datelike;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::calendar::{HolidayRegistry, HolidayTables};
use crate::error::{EngineError, EngineResult};

use super::types::{HolidayFile, PayrollRules};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── payroll.yaml        # Standard hours, overtime rate, bonus tiers
/// └── holidays/
///     ├── 2025.yaml       # Published holidays for 2025
///     └── 2026.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Overtime rate: {}", loader.rules().overtime_rate);
///
/// let registry = loader.holiday_registry();
/// println!("{} holidays in 2025", registry.public_holidays(2025).len());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: PayrollRules,
    holidays: HolidayTables,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if:
    /// - `payroll.yaml` or the `holidays` directory is missing
    /// - Any file contains invalid YAML
    /// - A rule value is out of range, or a holiday lies outside its file's year
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules_path = path.join("payroll.yaml");
        let rules = Self::load_yaml::<PayrollRules>(&rules_path)?;
        Self::validate_rules(&rules, &rules_path)?;

        let holidays = Self::load_holidays(&path.join("holidays"))?;

        debug!(
            path = %path.display(),
            holiday_years = ?holidays.years(),
            "Loaded payroll configuration"
        );

        Ok(Self { rules, holidays })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_rules(rules: &PayrollRules, path: &Path) -> EngineResult<()> {
        let invalid = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        if rules.standard_hours_per_day <= Decimal::ZERO {
            return Err(invalid(format!(
                "standard_hours_per_day must be positive (got {})",
                rules.standard_hours_per_day
            )));
        }
        if rules.overtime_rate.is_sign_negative() {
            return Err(invalid(format!(
                "overtime_rate must not be negative (got {})",
                rules.overtime_rate
            )));
        }
        if let Some(index) = rules.bonus_tiers.iter().position(|t| {
            t.bonus_rate.is_sign_negative()
                || t.min_attendance_percentage.is_sign_negative()
                || t.min_task_completion_rate.is_sign_negative()
                || t.min_punctuality_score.is_sign_negative()
        }) {
            return Err(invalid(format!("bonus tier {} has a negative value", index)));
        }
        Ok(())
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<HolidayTables> {
        let dir_str = holidays_dir.display().to_string();

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut tables = HolidayTables::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file = Self::load_yaml::<HolidayFile>(&path)?;
                if let Some(stray) = file.holidays.iter().find(|h| h.date.year() != file.year) {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "holiday '{}' on {} is outside year {}",
                            stray.name, stray.date, file.year
                        ),
                    });
                }
                if tables.contains_year(file.year) {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "holidays for year {} are declared in more than one file",
                            file.year
                        ),
                    });
                }
                debug!(year = file.year, count = file.holidays.len(), "Loaded holiday table");
                tables.insert_year(file.year, file.holidays);
            }
        }

        Ok(tables)
    }

    /// Returns the payroll rules.
    pub fn rules(&self) -> &PayrollRules {
        &self.rules
    }

    /// Returns the loaded holiday tables.
    pub fn holiday_tables(&self) -> &HolidayTables {
        &self.holidays
    }

    /// Builds a fresh holiday registry over the loaded tables.
    pub fn holiday_registry(&self) -> HolidayRegistry {
        HolidayRegistry::new(self.holidays.clone())
    }
}
