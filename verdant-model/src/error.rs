//! Error type for schema validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::issue::{FieldPath, Issue};

/// A value did not conform to a schema.
///
/// Carries every issue found, in document order, so a boundary can report
/// them all in one response.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("schema validation failed: {}", format_issues(.issues))]
pub struct SchemaValidationError {
    issues: Vec<Issue>,
}

fn format_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl SchemaValidationError {
    #[must_use]
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    #[must_use]
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// Rendered paths of all issues, in order.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.issues.iter().map(|issue| issue.path.to_string()).collect()
    }

    /// The first issue reported at exactly `path`, if any.
    #[must_use]
    pub fn issue_at(&self, path: &str) -> Option<&Issue> {
        let path = FieldPath::from(path);
        self.issues.iter().find(|issue| issue.path == path)
    }
}

/// Result type for schema validation.
pub type ModelResult<T> = Result<T, SchemaValidationError>;
