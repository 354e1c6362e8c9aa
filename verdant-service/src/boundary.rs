//! Inbound parsing, outbound shaping and error translation.
//!
//! This is the only place validation failures are logged. Each error is
//! logged once, when it is turned into an [`ErrorResponse`].

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};
use verdant_model::Schema;

use crate::error::{ErrorResponse, ServiceError, ServiceResult};

/// Parses `body` as JSON and validates it against `schema`.
pub fn parse_inbound<S: Schema>(schema: &S, body: &str) -> ServiceResult<S::Output> {
    let value: Value = serde_json::from_str(body)?;
    validate_inbound(schema, &value)
}

/// Validates an already-decoded inbound value.
pub fn validate_inbound<S: Schema>(schema: &S, value: &Value) -> ServiceResult<S::Output> {
    let parsed = schema.parse(value)?;
    debug!(schema = %schema.describe(), "inbound value validated");
    Ok(parsed)
}

/// Serializes `output` and checks it against the response `schema` before it
/// leaves the service. Returns the serialized value.
pub fn validate_outbound<S: Schema, T: Serialize>(schema: &S, output: &T) -> ServiceResult<Value> {
    let value = serde_json::to_value(output)?;
    schema.parse(&value)?;
    debug!(schema = %schema.describe(), "outbound value validated");
    Ok(value)
}

/// Returns the parameter's value, or `InvalidArgument` if it is absent or blank.
pub fn require_param<'a>(name: &str, value: Option<&'a str>) -> ServiceResult<&'a str> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(ServiceError::invalid_argument(name, "must not be blank")),
        None => Err(ServiceError::invalid_argument(name, "is required")),
    }
}

/// Translates `error` into its response, logging it once.
#[must_use]
pub fn respond_with_error(error: &ServiceError) -> ErrorResponse {
    let response = ErrorResponse::from_error(error);
    if error.is_client_error() {
        warn!(
            status = response.status,
            issues = response.issues.len(),
            "request rejected: {error}"
        );
    } else {
        error!(status = response.status, "request failed: {error}");
    }
    response
}
