//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use thiserror::Error;

use crate::models::ContributorClassification;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "basic_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid value for field 'basic_salary': must not be negative"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input field was malformed or out of range.
    #[error("Invalid value for field '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No GOSI rate row matched and statutory fallback is disabled.
    #[error(
        "No GOSI rate configuration for company '{company_id}' \
         (contributor type '{contributor_type}') and statutory fallback is disabled"
    )]
    ConfigurationMissing {
        /// The company the rates were requested for.
        company_id: String,
        /// The contributor classification the rates were requested for.
        contributor_type: ContributorClassification,
    },

    /// Two writers raced on the same employee's compensation.
    #[error("Concurrent compensation update detected for employee '{employee_id}'")]
    ConcurrencyConflict {
        /// The employee whose record was contended.
        employee_id: String,
    },

    /// An employee record was not found in the store.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        employee_id: String,
    },

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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
