//! Error types for the wage calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a payroll calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the wage calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use wage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
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

    /// No deduction rate set is effective for the given calculation date.
    #[error("No deduction rates effective on date {date}")]
    RateNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// A calculation input was out of range or otherwise invalid.
    ///
    /// Raised synchronously for negative amounts, negative rates, or a
    /// paid-days count exceeding the pro-ration base. Never clamped.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// A daily attendance record violated the status/hours invariant.
    ///
    /// Rejected during tally aggregation, before any calculation runs.
    #[error("Invalid attendance record on {date}: {message}")]
    InvalidAttendance {
        /// The date of the offending record.
        date: NaiveDate,
        /// A description of the violation.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
