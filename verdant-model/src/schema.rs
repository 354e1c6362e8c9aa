//! The [`Schema`] trait and the validation context it reports into.
//!
//! A schema checks an untrusted `serde_json::Value` and, when it conforms,
//! produces a typed output. Checking never stops at the first problem: every
//! issue is pushed into the [`Context`] with the path it was found at, and the
//! caller gets the complete list.
//!
//! Schemas hold no mutable state. They are built once (most of them in
//! `const` context) and shared freely between threads.

use serde_json::{Map, Value};
use std::sync::Arc;

use crate::error::{ModelResult, SchemaValidationError};
use crate::issue::{FieldPath, Issue, IssueCode, PathSegment};

/// A validator producing a typed value from JSON.
///
/// Implementors uphold one rule: `check` returns `None` only after reporting
/// at least one issue, and returns `Some` only when it reported none.
pub trait Schema: Send + Sync {
    type Output;

    /// Short human description of the accepted shape, used in union messages.
    fn describe(&self) -> String;

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output>;

    /// Called instead of [`Schema::check`] when an object field is absent.
    fn check_missing(&self, ctx: &mut Context) -> Option<Self::Output> {
        ctx.report(IssueCode::Required, "Required");
        None
    }

    /// Validates `value`, returning every issue on failure.
    fn parse(&self, value: &Value) -> ModelResult<Self::Output> {
        let mut ctx = Context::new();
        let output = self.check(value, &mut ctx);
        match output {
            Some(output) if ctx.is_clean() => Ok(output),
            _ => {
                if ctx.is_clean() {
                    ctx.report(IssueCode::Custom, "Invalid input");
                }
                Err(SchemaValidationError::new(ctx.into_issues()))
            }
        }
    }

    /// Like [`Schema::parse`] but discards the issues.
    fn safe_parse(&self, value: &Value) -> Option<Self::Output> {
        self.parse(value).ok()
    }

    /// Non-panicking conformance predicate.
    fn is_valid(&self, value: &Value) -> bool {
        self.safe_parse(value).is_some()
    }
}

impl<S: Schema + ?Sized> Schema for &S {
    type Output = S::Output;

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output> {
        (**self).check(value, ctx)
    }

    fn check_missing(&self, ctx: &mut Context) -> Option<Self::Output> {
        (**self).check_missing(ctx)
    }
}

impl<S: Schema + ?Sized> Schema for Arc<S> {
    type Output = S::Output;

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output> {
        (**self).check(value, ctx)
    }

    fn check_missing(&self, ctx: &mut Context) -> Option<Self::Output> {
        (**self).check_missing(ctx)
    }
}

/// Accumulates issues while a schema walks a value.
#[derive(Debug, Default)]
pub struct Context {
    path: FieldPath,
    issues: Vec<Issue>,
}

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A context at the same path with no issues, for trying an alternative
    /// without committing its issues.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            path: self.path.clone(),
            issues: Vec::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// Records an issue at the current path.
    pub fn report(&mut self, code: IssueCode, message: impl Into<String>) {
        self.issues.push(Issue::new(self.path.clone(), code, message));
    }

    /// Runs `f` one path segment deeper.
    pub fn at<T>(&mut self, segment: impl Into<PathSegment>, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment.into());
        let result = f(self);
        self.path.pop();
        result
    }

    pub fn invalid_type(&mut self, expected: &str, received: &Value) {
        let received = json_type(received);
        self.report(
            IssueCode::InvalidType {
                expected: expected.to_string(),
                received: received.to_string(),
            },
            format!("Expected {expected}, received {received}"),
        );
    }
}

/// The JSON type name of a value, as used in issue messages.
#[must_use]
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field-by-field reader for exact-shape objects.
///
/// Every field read is recorded; [`ObjectFields::finish`] then reports any key
/// the schema did not declare.
pub struct ObjectFields<'v> {
    map: &'v Map<String, Value>,
    known: Vec<&'static str>,
}

impl<'v> ObjectFields<'v> {
    /// Starts reading `value`, reporting a type issue if it is not an object.
    pub fn open(value: &'v Value, ctx: &mut Context) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self {
                map,
                known: Vec::new(),
            }),
            other => {
                ctx.invalid_type("object", other);
                None
            }
        }
    }

    /// Checks field `key` against `schema` at path `<current>.<key>`.
    pub fn field<S: Schema + ?Sized>(
        &mut self,
        key: &'static str,
        schema: &S,
        ctx: &mut Context,
    ) -> Option<S::Output> {
        self.known.push(key);
        let value = self.map.get(key);
        ctx.at(key, |ctx| match value {
            Some(value) => schema.check(value, ctx),
            None => schema.check_missing(ctx),
        })
    }

    /// Reports undeclared keys. Returns `true` when there were none.
    pub fn finish(self, ctx: &mut Context) -> bool {
        let unknown: Vec<String> = self
            .map
            .keys()
            .filter(|key| !self.known.contains(&key.as_str()))
            .cloned()
            .collect();
        if unknown.is_empty() {
            return true;
        }
        let listed = unknown
            .iter()
            .map(|key| format!("'{key}'"))
            .collect::<Vec<_>>()
            .join(", ");
        ctx.report(
            IssueCode::UnrecognizedKeys { keys: unknown },
            format!("Unrecognized key(s) in object: {listed}"),
        );
        false
    }
}
