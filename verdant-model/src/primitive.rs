//! Leaf schemas: strings, numbers, enums, dates, optional fields, arrays.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashSet;

use crate::entity::Identified;
use crate::issue::IssueCode;
use crate::schema::{Context, Schema};

/// A JSON string, optionally required to be non-empty.
#[derive(Debug, Clone, Copy)]
pub struct StringSchema {
    min_len: usize,
}

impl StringSchema {
    #[must_use]
    pub const fn any() -> Self {
        Self { min_len: 0 }
    }

    #[must_use]
    pub const fn non_empty() -> Self {
        Self { min_len: 1 }
    }
}

impl Schema for StringSchema {
    type Output = String;

    fn describe(&self) -> String {
        "string".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<String> {
        let Value::String(text) = value else {
            ctx.invalid_type("string", value);
            return None;
        };
        if text.chars().count() < self.min_len {
            ctx.report(
                IssueCode::TooSmall {
                    minimum: self.min_len as f64,
                    inclusive: true,
                },
                format!("String must contain at least {} character(s)", self.min_len),
            );
            return None;
        }
        Some(text.clone())
    }
}

/// A JSON number with optional inclusive bounds.
#[derive(Debug, Clone, Copy)]
pub struct NumberSchema {
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberSchema {
    #[must_use]
    pub const fn any() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub const fn non_negative() -> Self {
        Self {
            min: Some(0.0),
            max: None,
        }
    }

    #[must_use]
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

impl Schema for NumberSchema {
    type Output = f64;

    fn describe(&self) -> String {
        "number".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<f64> {
        let Some(number) = value.as_f64() else {
            ctx.invalid_type("number", value);
            return None;
        };
        check_bounds(number, self.min, self.max, ctx).then_some(number)
    }
}

/// A JSON number with no fractional part. No coercion from strings or
/// from non-integral floats.
///
/// Whole floats such as `3.0` are accepted and come back as the integer `3`,
/// so re-serializing the output may change the text of the input.
#[derive(Debug, Clone, Copy)]
pub struct IntegerSchema {
    min: Option<i64>,
    max: Option<i64>,
}

impl IntegerSchema {
    #[must_use]
    pub const fn any() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub const fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    #[must_use]
    pub const fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

// Largest magnitude at which every f64 integer is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Schema for IntegerSchema {
    type Output = i64;

    fn describe(&self) -> String {
        "integer".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<i64> {
        let Some(number) = value.as_f64() else {
            ctx.invalid_type("integer", value);
            return None;
        };
        let int = match value.as_i64() {
            Some(int) => int,
            None if number.fract() != 0.0 => {
                ctx.report(
                    IssueCode::InvalidType {
                        expected: "integer".into(),
                        received: "float".into(),
                    },
                    "Expected integer, received float",
                );
                return None;
            }
            // Whole, but too large to have been transmitted exactly.
            None if number.abs() > MAX_SAFE_INTEGER => {
                check_bounds(number, Some(-MAX_SAFE_INTEGER), Some(MAX_SAFE_INTEGER), ctx);
                return None;
            }
            None => number as i64,
        };
        let ok = check_bounds(
            int as f64,
            self.min.map(|min| min as f64),
            self.max.map(|max| max as f64),
            ctx,
        );
        ok.then_some(int)
    }
}

fn check_bounds(number: f64, min: Option<f64>, max: Option<f64>, ctx: &mut Context) -> bool {
    let mut ok = true;
    if let Some(min) = min.filter(|min| number < *min) {
        ctx.report(
            IssueCode::TooSmall {
                minimum: min,
                inclusive: true,
            },
            format!("Number must be greater than or equal to {min}"),
        );
        ok = false;
    }
    if let Some(max) = max.filter(|max| number > *max) {
        ctx.report(
            IssueCode::TooBig {
                maximum: max,
                inclusive: true,
            },
            format!("Number must be less than or equal to {max}"),
        );
        ok = false;
    }
    ok
}

/// A closed set of string values, each mapped to a Rust enum variant.
pub trait WireEnum: Copy + Send + Sync + 'static {
    const VARIANTS: &'static [Self];

    fn wire_name(self) -> &'static str;
}

/// Accepts exactly the wire names of `E`.
#[derive(Debug, Clone, Copy)]
pub struct EnumSchema<E> {
    _variants: std::marker::PhantomData<fn() -> E>,
}

impl<E: WireEnum> EnumSchema<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _variants: std::marker::PhantomData,
        }
    }

    fn options() -> Vec<String> {
        E::VARIANTS
            .iter()
            .map(|variant| variant.wire_name().to_string())
            .collect()
    }
}

impl<E: WireEnum> Schema for EnumSchema<E> {
    type Output = E;

    fn describe(&self) -> String {
        Self::options().join(" | ")
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<E> {
        let Value::String(text) = value else {
            ctx.invalid_type("string", value);
            return None;
        };
        if let Some(variant) = E::VARIANTS.iter().find(|v| v.wire_name() == text.as_str()) {
            return Some(*variant);
        }
        let options = Self::options();
        let listed = options
            .iter()
            .map(|option| format!("'{option}'"))
            .collect::<Vec<_>>()
            .join(" | ");
        ctx.report(
            IssueCode::InvalidEnumValue {
                options,
                received: text.clone(),
            },
            format!("Invalid enum value. Expected {listed}, received '{text}'"),
        );
        None
    }
}

/// An RFC 3339 timestamp string, normalized to UTC.
///
/// The instant is kept but the offset is not: `2027-03-01T02:00:00+02:00`
/// parses to the same value as `2027-03-01T00:00:00Z` and is written back in
/// the `Z` form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeSchema;

impl Schema for DateTimeSchema {
    type Output = DateTime<Utc>;

    fn describe(&self) -> String {
        "datetime".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<DateTime<Utc>> {
        let Value::String(text) = value else {
            ctx.invalid_type("string", value);
            return None;
        };
        match DateTime::parse_from_rfc3339(text) {
            Ok(parsed) => Some(parsed.with_timezone(&Utc)),
            Err(_) => {
                ctx.report(IssueCode::InvalidDate, "Invalid datetime");
                None
            }
        }
    }
}

/// Any JSON value, passed through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyJson;

impl Schema for AnyJson {
    type Output = Value;

    fn describe(&self) -> String {
        "any".into()
    }

    fn check(&self, value: &Value, _ctx: &mut Context) -> Option<Value> {
        Some(value.clone())
    }
}

/// A field that may be absent. A present value, including `null`, must
/// still satisfy the inner schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optional<S>(pub S);

impl<S: Schema> Schema for Optional<S> {
    type Output = Option<S::Output>;

    fn describe(&self) -> String {
        format!("{}?", self.0.describe())
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output> {
        self.0.check(value, ctx).map(Some)
    }

    fn check_missing(&self, _ctx: &mut Context) -> Option<Self::Output> {
        Some(None)
    }
}

/// An ordered JSON array whose elements all satisfy one schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArraySchema<S> {
    element: S,
}

impl<S: Schema> ArraySchema<S> {
    #[must_use]
    pub const fn new(element: S) -> Self {
        Self { element }
    }

    #[must_use]
    pub fn element(&self) -> &S {
        &self.element
    }
}

impl<S: Schema> Schema for ArraySchema<S> {
    type Output = Vec<S::Output>;

    fn describe(&self) -> String {
        format!("{}[]", self.element.describe())
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output> {
        let Value::Array(items) = value else {
            ctx.invalid_type("array", value);
            return None;
        };
        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (index, item) in items.iter().enumerate() {
            match ctx.at(index, |ctx| self.element.check(item, ctx)) {
                Some(parsed) => out.push(parsed),
                None => ok = false,
            }
        }
        ok.then_some(out)
    }
}

/// An array of identified entities whose ids must be unique.
///
/// A repeated id is reported at the `id` of each later occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityListSchema<S> {
    inner: ArraySchema<S>,
}

impl<S: Schema> EntityListSchema<S> {
    #[must_use]
    pub const fn new(element: S) -> Self {
        Self {
            inner: ArraySchema::new(element),
        }
    }

    #[must_use]
    pub fn element(&self) -> &S {
        self.inner.element()
    }
}

impl<S> Schema for EntityListSchema<S>
where
    S: Schema,
    S::Output: Identified,
{
    type Output = Vec<S::Output>;

    fn describe(&self) -> String {
        self.inner.describe()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output> {
        let Value::Array(elements) = value else {
            ctx.invalid_type("array", value);
            return None;
        };
        let mut entities = Vec::with_capacity(elements.len());
        let mut seen = HashSet::with_capacity(elements.len());
        let mut ok = true;
        for (index, element) in elements.iter().enumerate() {
            let parsed = ctx.at(index, |ctx| self.element().check(element, ctx));
            // Invalid elements still take part in the uniqueness check through
            // their raw `id`, so both kinds of issue come back together.
            let id = match &parsed {
                Some(entity) => Some(entity.entity_id().to_string()),
                None => element
                    .get("id")
                    .and_then(Value::as_str)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string),
            };
            if let Some(id) = id {
                if !seen.insert(id.clone()) {
                    ctx.at(index, |ctx| {
                        ctx.at("id", |ctx| {
                            ctx.report(
                                IssueCode::DuplicateId { id: id.clone() },
                                format!("Duplicate id '{id}' in collection"),
                            );
                        });
                    });
                    ok = false;
                }
            }
            match parsed {
                Some(entity) => entities.push(entity),
                None => ok = false,
            }
        }
        ok.then_some(entities)
    }
}
