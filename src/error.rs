//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation and
//! compliance validation.

use thiserror::Error;

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
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// No configuration is registered for the requested country.
    #[error("Unsupported country: {code}")]
    UnsupportedCountry {
        /// The country code that has no registered configuration.
        code: String,
    },

    /// A bracket or slice table in the configuration is malformed.
    #[error("Invalid tax table '{table}' for country '{country}': {message}")]
    InvalidTaxTable {
        /// The country whose table failed validation.
        country: String,
        /// The name of the offending table (e.g., "IRRF", "INSS").
        table: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A salary input was invalid (e.g., negative).
    #[error("Invalid salary: {message}")]
    InvalidSalary {
        /// A description of what made the salary invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
