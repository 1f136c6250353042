//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the calendar, holiday and salary layers can signal.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type. None of
/// them return partial results: a calculation either completes or signals
/// one of these variants.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidArgument {
///     field: "monthly_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid argument 'monthly_salary': must not be negative"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The year/month combination cannot be used for a salary calculation,
    /// either because it is not a real month or because it has no working days.
    #[error("Invalid period {year}-{month:02}: {message}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
        /// Why the period was rejected.
        message: String,
    },

    /// A numeric input was negative or otherwise unusable.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The name of the offending input.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// A date string could not be parsed as a calendar date.
    #[error("Invalid calendar date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// A general calculation error occurred (e.g. decimal overflow).
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
