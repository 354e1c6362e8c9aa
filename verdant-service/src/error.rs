//! Boundary errors and their translation into responses.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use verdant_model::{Issue, SchemaValidationError};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything the boundary can fail with.
///
/// Core crates raise their own errors; they arrive here unmodified and are
/// translated exactly once, by [`ErrorResponse::from_error`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Untrusted input did not conform to its schema.
    #[error(transparent)]
    SchemaValidation(#[from] SchemaValidationError),

    /// A request parameter was missing or malformed.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// A unit outside the known set reached conversion code.
    #[error(transparent)]
    UnsupportedUnit(#[from] verdant_types::Error),

    /// An asynchronous refinement step failed.
    #[error("async validation failed: {source}")]
    AsyncValidation {
        #[source]
        source: BoxError,
    },

    /// Body text was not JSON, or output could not be written.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Configuration could not be read.
    #[error("config error: {0}")]
    Config(String),
}

impl ServiceError {
    #[must_use]
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Wraps the failure of an async validation step, keeping it as the source.
    #[must_use]
    pub fn async_validation(source: impl Into<BoxError>) -> Self {
        Self::AsyncValidation {
            source: source.into(),
        }
    }

    /// HTTP-class status code for this error.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::SchemaValidation(_) | Self::InvalidArgument { .. } | Self::Serialization(_) => {
                400
            }
            Self::NotFound { .. } => 404,
            Self::UnsupportedUnit(_) | Self::AsyncValidation { .. } | Self::Config(_) => 500,
        }
    }

    /// Client errors are the caller's to fix; everything else is ours.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status())
    }
}

/// Result type for boundary operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// The body sent back for a failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
}

impl ErrorResponse {
    /// Builds the response for `error`. Server faults get a generic message
    /// so internal detail does not leak to clients.
    #[must_use]
    pub fn from_error(error: &ServiceError) -> Self {
        let status = error.status();
        let issues = match error {
            ServiceError::SchemaValidation(validation) => validation.issues().to_vec(),
            _ => Vec::new(),
        };
        let message = match error {
            ServiceError::SchemaValidation(_) => "validation failed".to_string(),
            _ if error.is_client_error() => error.to_string(),
            _ => "internal error".to_string(),
        };
        Self {
            status,
            error: message,
            issues,
        }
    }
}

impl From<&ServiceError> for ErrorResponse {
    fn from(error: &ServiceError) -> Self {
        Self::from_error(error)
    }
}
