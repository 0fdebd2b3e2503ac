//! Typed error handling for the payroll service
//!
//! Handlers return [`PayrollError`], which knows its HTTP status, a stable
//! error code, and how to render itself.
//!
//! # Error Categories
//!
//! - [`EntityError`]: missing entities and rejected lifecycle transitions
//! - [`ValidationError`]: malformed input (ids, JSON bodies)
//! - [`StorageError`]: storage backend failures
//! - [`ConfigError`]: configuration parsing and validation
//!
//! Most errors render as the JSON envelope `{"code", "message", "details"}`.
//! A rejected transition renders as an `application/problem+json` body with
//! status 405.

use crate::entities::order::TransitionError;
use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Media type of problem detail bodies
pub const PROBLEM_JSON: &str = "application/problem+json";

/// The main error type of the service
#[derive(Debug)]
pub enum PayrollError {
    /// Entity-related errors
    Entity(EntityError),

    /// Validation errors
    Validation(ValidationError),

    /// Storage backend errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for PayrollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayrollError::Entity(e) => write!(f, "{}", e),
            PayrollError::Validation(e) => write!(f, "{}", e),
            PayrollError::Storage(e) => write!(f, "{}", e),
            PayrollError::Config(e) => write!(f, "{}", e),
            PayrollError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for PayrollError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PayrollError::Entity(e) => Some(e),
            PayrollError::Validation(e) => Some(e),
            PayrollError::Storage(e) => Some(e),
            PayrollError::Config(e) => Some(e),
            PayrollError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Problem detail body (`application/problem+json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub title: String,
    pub detail: String,
}

impl PayrollError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PayrollError::Entity(e) => e.status_code(),
            PayrollError::Validation(_) => StatusCode::BAD_REQUEST,
            PayrollError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PayrollError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PayrollError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PayrollError::Entity(e) => e.error_code(),
            PayrollError::Validation(e) => e.error_code(),
            PayrollError::Storage(_) => "STORAGE_ERROR",
            PayrollError::Config(_) => "CONFIG_ERROR",
            PayrollError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Problem body, for errors rendered as problem details
    pub fn to_problem(&self) -> Option<Problem> {
        match self {
            PayrollError::Entity(EntityError::InvalidTransition(e)) => Some(Problem {
                title: "Method not allowed".to_string(),
                detail: e.to_string(),
            }),
            _ => None,
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            PayrollError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id
                }))
            }
            PayrollError::Validation(ValidationError::InvalidId { entity_type, value }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "value": value
                }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for PayrollError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }

        match self.to_problem() {
            Some(problem) => (
                status,
                [(header::CONTENT_TYPE, PROBLEM_JSON)],
                // Json would overwrite the problem content type
                serde_json::to_string(&problem).unwrap_or_default(),
            )
                .into_response(),
            None => (status, Json(self.to_response())).into_response(),
        }
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity operations
#[derive(Debug)]
pub enum EntityError {
    /// Entity was not found
    NotFound { entity_type: String, id: String },

    /// Lifecycle transition attempted from a state that does not allow it
    InvalidTransition(TransitionError),
}

impl EntityError {
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        EntityError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
            EntityError::InvalidTransition(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::InvalidTransition(_) => "INVALID_TRANSITION",
        }
    }
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, id } => {
                write!(f, "Could not find {} {}", entity_type, id)
            }
            EntityError::InvalidTransition(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EntityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EntityError::InvalidTransition(e) => Some(e),
            EntityError::NotFound { .. } => None,
        }
    }
}

impl From<EntityError> for PayrollError {
    fn from(err: EntityError) -> Self {
        PayrollError::Entity(err)
    }
}

impl From<TransitionError> for PayrollError {
    fn from(err: TransitionError) -> Self {
        PayrollError::Entity(EntityError::InvalidTransition(err))
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Path identifier could not be parsed
    InvalidId { entity_type: String, value: String },

    /// Invalid JSON body
    InvalidJson { message: String },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidId { .. } => "INVALID_ENTITY_ID",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidId { entity_type, value } => {
                write!(f, "Invalid {} id: {}", entity_type, value)
            }
            ValidationError::InvalidJson { message } => write!(f, "Invalid JSON: {}", message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for PayrollError {
    fn from(err: ValidationError) -> Self {
        PayrollError::Validation(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug)]
pub enum StorageError {
    /// Connection error
    ConnectionError { backend: String, message: String },

    /// Query or store operation failed
    OperationFailed { operation: String, message: String },

    /// Backend not compiled into this binary
    Unavailable { backend: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionError { backend, message } => {
                write!(f, "Failed to connect to {}: {}", backend, message)
            }
            StorageError::OperationFailed { operation, message } => {
                write!(f, "Storage {} failed: {}", operation, message)
            }
            StorageError::Unavailable { backend } => {
                write!(f, "Storage backend '{}' is unavailable", backend)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    /// Wrap a store failure for the named operation
    pub fn operation(operation: &str) -> impl FnOnce(anyhow::Error) -> PayrollError + '_ {
        move |err| {
            PayrollError::Storage(StorageError::OperationFailed {
                operation: operation.to_string(),
                message: format!("{:#}", err),
            })
        }
    }
}

impl From<StorageError> for PayrollError {
    fn from(err: StorageError) -> Self {
        PayrollError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PayrollError {
    fn from(err: ConfigError) -> Self {
        PayrollError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for PayrollError {
    fn from(err: serde_json::Error) -> Self {
        PayrollError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for payroll operations
pub type PayrollResult<T> = Result<T, PayrollError>;
