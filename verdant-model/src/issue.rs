//! Validation issues and the field paths they point at.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One step of a [`FieldPath`]: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Location of a value inside a JSON document.
///
/// Rendered dot-separated with array indices as plain numbers, e.g.
/// `zones.0.placements.2.item`. The document root is the empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl From<&str> for FieldPath {
    fn from(text: &str) -> Self {
        if text.is_empty() {
            return Self::root();
        }
        Self(
            text.split('.')
                .map(|part| match part.parse::<usize>() {
                    Ok(index) => PathSegment::Index(index),
                    Err(_) => PathSegment::Key(part.to_string()),
                })
                .collect(),
        )
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(FieldPath::from(text.as_str()))
    }
}

/// Machine-readable reason for an [`Issue`].
///
/// Serialized with a `code` tag so boundary responses can be matched on by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType { expected: String, received: String },
    Required,
    UnrecognizedKeys { keys: Vec<String> },
    InvalidEnumValue { options: Vec<String>, received: String },
    TooSmall { minimum: f64, inclusive: bool },
    TooBig { maximum: f64, inclusive: bool },
    InvalidDate,
    InvalidReference { prefix: String },
    InvalidUnion { branches: Vec<UnionBranch> },
    DuplicateId { id: String },
    Custom,
}

/// The issues one alternative of a union produced before it was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionBranch {
    pub shape: String,
    pub issues: Vec<Issue>,
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub path: FieldPath,
    #[serde(flatten)]
    pub code: IssueCode,
    pub message: String,
}

impl Issue {
    #[must_use]
    pub fn new(path: FieldPath, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            path,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_display_joins_with_dots() {
        let mut path = FieldPath::root();
        path.push("zones".into());
        path.push(0usize.into());
        path.push("name".into());
        assert_eq!(path.to_string(), "zones.0.name");
    }

    #[test]
    fn path_parses_indices() {
        let path = FieldPath::from("zones.3.id");
        assert_eq!(path.segments()[1], PathSegment::Index(3));
        assert_eq!(path.to_string(), "zones.3.id");
    }

    #[test]
    fn empty_text_is_root() {
        assert!(FieldPath::from("").is_root());
    }
}
