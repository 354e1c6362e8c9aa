//! Relation fields that hold either a reference or an embedded value.
//!
//! A reference is an object of exactly `{"id": "<prefix>_<suffix>"}`. The
//! reference form is tried first and wins outright; the embedded schema only
//! runs when the value is not a well-formed reference.
//!
//! This ordering has one known ambiguity: an embedded value whose entire
//! serialization is `{"id": "plant_123"}` is indistinguishable from a
//! reference and is classified as one. Telling them apart would need an
//! explicit discriminator on the wire, which existing clients do not send,
//! so the ambiguity is kept as-is.

use serde::Serialize;
use serde_json::Value;
use verdant_types::PrefixedId;

use crate::entity::Identified;
use crate::issue::{IssueCode, UnionBranch};
use crate::schema::{Context, ObjectFields, Schema};
use crate::primitive::StringSchema;

/// A bare pointer to an entity stored elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reference {
    pub id: PrefixedId,
}

/// A relation resolved to one of its two representations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RefOrEmbed<T> {
    Ref(Reference),
    Embed(T),
}

impl<T> RefOrEmbed<T> {
    #[must_use]
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            RefOrEmbed::Ref(reference) => Some(reference),
            RefOrEmbed::Embed(_) => None,
        }
    }

    #[must_use]
    pub fn as_embedded(&self) -> Option<&T> {
        match self {
            RefOrEmbed::Ref(_) => None,
            RefOrEmbed::Embed(value) => Some(value),
        }
    }

    #[must_use]
    pub fn is_reference(&self) -> bool {
        matches!(self, RefOrEmbed::Ref(_))
    }
}

impl<T: Identified> Identified for RefOrEmbed<T> {
    fn entity_id(&self) -> &str {
        match self {
            RefOrEmbed::Ref(reference) => reference.id.as_str(),
            RefOrEmbed::Embed(value) => value.entity_id(),
        }
    }
}

/// A list relation: all references or all embedded values, never mixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RefsOrEmbedMany<T> {
    Refs(Vec<Reference>),
    Embeds(Vec<T>),
}

impl<T> RefsOrEmbedMany<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            RefsOrEmbedMany::Refs(refs) => refs.len(),
            RefsOrEmbedMany::Embeds(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns the reference if `value` is exactly `{"id": "<prefix>_<suffix>"}`.
fn match_reference(prefix: &str, value: &Value) -> Option<Reference> {
    let Value::Object(map) = value else {
        return None;
    };
    if map.len() != 1 {
        return None;
    }
    let id = map.get("id")?.as_str()?;
    PrefixedId::parse_with_prefix(prefix, id)
        .ok()
        .map(|id| Reference { id })
}

/// Reports why `value` is not a reference. Only used once both branches failed.
fn explain_reference(prefix: &str, value: &Value, ctx: &mut Context) {
    let Some(mut fields) = ObjectFields::open(value, ctx) else {
        return;
    };
    if let Some(id) = fields.field("id", &StringSchema::any(), ctx) {
        if !PrefixedId::has_prefix(prefix, &id) {
            ctx.at("id", |ctx| {
                ctx.report(
                    IssueCode::InvalidReference {
                        prefix: prefix.to_string(),
                    },
                    format!("Expected reference id of the form {prefix}_<id>, received '{id}'"),
                );
            });
        }
    }
    fields.finish(ctx);
}

fn reference_shape(prefix: &str) -> String {
    format!("reference {{id: {prefix}_<id>}}")
}

fn report_union(ctx: &mut Context, branches: Vec<UnionBranch>) {
    let shapes = branches
        .iter()
        .map(|branch| branch.shape.as_str())
        .collect::<Vec<_>>()
        .join(" or ");
    ctx.report(
        IssueCode::InvalidUnion { branches },
        format!("Invalid input: expected {shapes}"),
    );
}

/// Schema for a single reference-or-embed relation. See the module docs for
/// the resolution order.
#[derive(Debug, Clone, Copy)]
pub struct RefOrEmbedSchema<S> {
    prefix: &'static str,
    embedded: S,
}

impl<S: Schema> RefOrEmbedSchema<S> {
    #[must_use]
    pub const fn new(prefix: &'static str, embedded: S) -> Self {
        Self { prefix, embedded }
    }

    #[must_use]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[must_use]
    pub fn embedded(&self) -> &S {
        &self.embedded
    }
}

/// Builds a [`RefOrEmbedSchema`] accepting `{id: "<prefix>_…"}` or a value of `embedded`.
#[must_use]
pub const fn ref_or_embed<S: Schema>(prefix: &'static str, embedded: S) -> RefOrEmbedSchema<S> {
    RefOrEmbedSchema::new(prefix, embedded)
}

impl<S: Schema> Schema for RefOrEmbedSchema<S> {
    type Output = RefOrEmbed<S::Output>;

    fn describe(&self) -> String {
        format!("{} or {}", reference_shape(self.prefix), self.embedded.describe())
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output> {
        if let Some(reference) = match_reference(self.prefix, value) {
            return Some(RefOrEmbed::Ref(reference));
        }

        let mut embed_ctx = ctx.fork();
        let embedded = self.embedded.check(value, &mut embed_ctx);
        if let (Some(embedded), true) = (embedded, embed_ctx.is_clean()) {
            return Some(RefOrEmbed::Embed(embedded));
        }

        let mut ref_ctx = ctx.fork();
        explain_reference(self.prefix, value, &mut ref_ctx);
        report_union(
            ctx,
            vec![
                UnionBranch {
                    shape: reference_shape(self.prefix),
                    issues: ref_ctx.into_issues(),
                },
                UnionBranch {
                    shape: self.embedded.describe(),
                    issues: embed_ctx.into_issues(),
                },
            ],
        );
        None
    }
}

/// Schema for a list relation: all references, or all embedded values.
///
/// The reference form is tried first, so an empty list resolves to
/// `RefsOrEmbedMany::Refs(vec![])`.
#[derive(Debug, Clone, Copy)]
pub struct RefsOrEmbedManySchema<S> {
    prefix: &'static str,
    embedded: S,
}

/// Builds a [`RefsOrEmbedManySchema`].
#[must_use]
pub const fn refs_or_embed_many<S: Schema>(
    prefix: &'static str,
    embedded: S,
) -> RefsOrEmbedManySchema<S> {
    RefsOrEmbedManySchema { prefix, embedded }
}

impl<S: Schema> Schema for RefsOrEmbedManySchema<S> {
    type Output = RefsOrEmbedMany<S::Output>;

    fn describe(&self) -> String {
        format!(
            "{}[] or {}[]",
            reference_shape(self.prefix),
            self.embedded.describe()
        )
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output> {
        let Value::Array(elements) = value else {
            ctx.invalid_type("array", value);
            return None;
        };

        let references: Option<Vec<Reference>> = elements
            .iter()
            .map(|element| match_reference(self.prefix, element))
            .collect();
        if let Some(references) = references {
            return Some(RefsOrEmbedMany::Refs(references));
        }

        let mut embed_ctx = ctx.fork();
        let mut embedded = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            if let Some(parsed) = embed_ctx.at(index, |ctx| self.embedded.check(element, ctx)) {
                embedded.push(parsed);
            }
        }
        if embed_ctx.is_clean() {
            return Some(RefsOrEmbedMany::Embeds(embedded));
        }

        let mut ref_ctx = ctx.fork();
        for (index, element) in elements.iter().enumerate() {
            if match_reference(self.prefix, element).is_none() {
                ref_ctx.at(index, |ctx| explain_reference(self.prefix, element, ctx));
            }
        }
        report_union(
            ctx,
            vec![
                UnionBranch {
                    shape: format!("{}[]", reference_shape(self.prefix)),
                    issues: ref_ctx.into_issues(),
                },
                UnionBranch {
                    shape: format!("{}[]", self.embedded.describe()),
                    issues: embed_ctx.into_issues(),
                },
            ],
        );
        None
    }
}
