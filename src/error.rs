//! Error types for the Shift Earnings Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The typed calculator itself never fails; these errors come from parsing
//! caller input, validating job configuration and loading configuration files.

use thiserror::Error;

/// The main error type for the Shift Earnings Engine.
///
/// # Example
///
/// ```
/// use shift_earnings::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/jobs.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/jobs.yaml");
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

    /// A time-of-day string was not in `HH:MM` form.
    #[error("Invalid time for '{field}': '{value}' (expected HH:MM)")]
    InvalidTime {
        /// The input field holding the time (e.g. "start_time").
        field: String,
        /// The rejected value.
        value: String,
    },

    /// A date string was not in `YYYY-MM-DD` form.
    #[error("Invalid date: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected value.
        value: String,
    },

    /// A job configuration value was rejected by validation.
    #[error("Invalid job field '{field}': {message}")]
    InvalidJob {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No job with the given id exists in the job store.
    #[error("Job not found: {id}")]
    JobNotFound {
        /// The job id that was not found.
        id: String,
    },

    /// The job store has no active job selected.
    #[error("No active job selected")]
    NoActiveJob,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
