//! Error types for the matrix operations service.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`CsvError`] - CSV reading and decoding errors
//! - [`ValidationError`] - matrix shape and content violations
//! - [`ConfigError`] - startup configuration errors
//! - [`ApiError`] - top-level request errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while reading or decoding an uploaded CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read the source.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode the file content to text.
    #[error("Failed to decode file content: {0}")]
    Encoding(String),

    /// The CSV stream was malformed beyond recovery.
    #[error("Invalid CSV format: {0}")]
    Parse(String),
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Matrix shape or content violations.
///
/// The display strings are part of the HTTP contract and are returned
/// verbatim in 422 responses.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty grid, or a row whose length differs from the row count.
    #[error("Invalid matrix size")]
    InvalidSize,

    /// A cell that does not parse as a number.
    #[error("Matrix contains invalid characters")]
    InvalidCharacters,
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// PORT was set but is not a valid port number.
    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),

    /// APP_ENV was set but is not a known environment name.
    #[error("Invalid APP_ENV value '{0}' (expected development, production or test)")]
    InvalidEnv(String),
}

// =============================================================================
// Api Errors (top-level)
// =============================================================================

/// Top-level request errors.
///
/// This is the error type returned by [`crate::pipeline::run_operation`]
/// and mapped to HTTP responses in [`crate::api::types`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// No upload was provided in the request.
    #[error("File not found.")]
    FileNotFound,

    /// The upload has no readable location on disk.
    #[error("File path not found")]
    FilePathNotFound,

    /// The parsed grid is not a square numeric matrix.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The upload could not be read or decoded.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// Anything unanticipated.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Whether the error is operational: anticipated, caller-attributable
    /// and safe to describe to the client verbatim.
    ///
    /// Non-operational detail is suppressed from production responses.
    pub fn is_operational(&self) -> bool {
        match self {
            Self::FileNotFound | Self::FilePathNotFound | Self::Validation(_) => true,
            Self::Csv(_) | Self::Internal(_) => false,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for request handling.
pub type ApiResult<T> = Result<T, ApiError>;
