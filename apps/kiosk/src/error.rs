//! # API Error Type
//!
//! Unified error type for kiosk commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Grill Point                            │
//! │                                                                         │
//! │  Shell line: checkout "" "Rua Augusta, 200"                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ── ValidationError::Required ──┐              │  │
//! │  │         │                                         │              │  │
//! │  │         ▼                                         ▼              │  │
//! │  │  Unknown id? ──────── CoreError::NotFound ────── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Printed by the shell as:                                              │
//! │  { "error": { "code": "VALIDATION_ERROR",                              │
//! │               "message": "name is required" } }                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The admin store itself never fails; unknown ids come back as
//! `false`/`None` and commands turn those into `NOT_FOUND`.

use serde::Serialize;

use grill_core::{CoreError, ValidationError};

use crate::channel::ChannelError;
use crate::state::ConfigError;

/// Error returned from kiosk commands.
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Order not found: PED-999"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Id matched nothing
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed (e.g. checkout with an empty cart)
    CartError,

    /// The messaging channel did not acknowledge the order
    ChannelError,

    /// Bad configuration value
    ConfigError,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Lookup miss, worded by [`CoreError::NotFound`].
    pub fn not_found(resource: &'static str, id: &str) -> Self {
        CoreError::not_found(resource, id).into()
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::NotFound { .. } => ApiError::new(ErrorCode::NotFound, message),
            CoreError::EmptyCart => ApiError::cart(message),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ChannelError> for ApiError {
    fn from(err: ChannelError) -> Self {
        tracing::error!(error = %err, "Message channel failed");
        ApiError::new(ErrorCode::ChannelError, err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!(error = %err, "Serialization failed");
        ApiError::internal("Could not serialize response")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
