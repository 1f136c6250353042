//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::calendar::HolidayRegistry;
use crate::config::{ConfigLoader, PayrollRules};

/// Shared application state.
///
/// The payroll rules are read-only after startup. The holiday registry is
/// behind a lock because custom holidays can be added and removed while
/// other requests read the calendar.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<PayrollRules>,
    holidays: Arc<RwLock<HolidayRegistry>>,
}

impl AppState {
    /// Creates the application state from loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        let registry = config.holiday_registry();
        Self::with_registry(config.rules().clone(), registry)
    }

    /// Creates the application state from explicit rules and registry.
    pub fn with_registry(rules: PayrollRules, registry: HolidayRegistry) -> Self {
        Self {
            rules: Arc::new(rules),
            holidays: Arc::new(RwLock::new(registry)),
        }
    }

    /// Returns the payroll rules.
    pub fn rules(&self) -> &PayrollRules {
        &self.rules
    }

    /// Locks the holiday registry for reading.
    ///
    /// Registry updates cannot leave it half-modified, so a poisoned lock is
    /// recovered rather than propagated.
    pub fn holidays(&self) -> RwLockReadGuard<'_, HolidayRegistry> {
        self.holidays.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the holiday registry for writing.
    pub fn holidays_mut(&self) -> RwLockWriteGuard<'_, HolidayRegistry> {
        self.holidays.write().unwrap_or_else(PoisonError::into_inner)
    }
}
