//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Menuboard.
///
/// Domain lookups surface `NotFound` with a caller-facing message, search
/// input parsing surfaces `Parse`, and everything else is an infrastructure
/// condition that renders as a generic server error.
#[derive(Error, Debug)]
pub enum MenuboardError {
    /// Lookup by identity matched no record. The message is rendered
    /// verbatim at the request boundary.
    #[error("{0}")]
    NotFound(String),

    /// Numeric text could not be parsed (search price input).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Record-to-entity field mapping failed. Indicates a configuration
    /// defect (schema/entity drift), not a normal runtime condition.
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Request validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MenuboardError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Parse(_) | Self::Validation(_) => 400,
            Self::Mapping(_)
            | Self::Database(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Parse(_) => "PARSE_ERROR",
            Self::Mapping(_) => "MAPPING_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error with a caller-facing message.
    #[must_use]
    pub fn not_found<T: Into<String>>(message: T) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse<T: Into<String>>(message: T) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a mapping error.
    #[must_use]
    pub fn mapping<T: Into<String>>(message: T) -> Self {
        Self::Mapping(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for MenuboardError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound("database row not found".to_string()),
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for MenuboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

impl From<std::num::ParseIntError> for MenuboardError {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `MenuboardError`.
    #[must_use]
    pub fn from_error(error: &MenuboardError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&MenuboardError> for ErrorResponse {
    fn from(error: &MenuboardError) -> Self {
        Self::from_error(error)
    }
}
