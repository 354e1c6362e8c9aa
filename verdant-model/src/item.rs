//! Item and packet schemas, and the factories that specialize their metadata.

use serde_json::Value;

use crate::entity::{Item, Packet};
use crate::primitive::{AnyJson, DateTimeSchema, IntegerSchema, Optional, StringSchema};
use crate::schema::{Context, ObjectFields, Schema};
use crate::values::PresentationSchema;

/// Metadata of the base shapes: optional and unconstrained.
pub type OpenMetadata = Optional<AnyJson>;

/// Validates an [`Item`] whose `metadata` is checked by `M`.
#[derive(Debug, Clone, Copy)]
pub struct ItemSchema<M> {
    name: &'static str,
    metadata: M,
}

impl<M: Schema> ItemSchema<M> {
    pub(crate) const fn with_name(name: &'static str, metadata: M) -> Self {
        Self { name, metadata }
    }

    /// Renames the shape as it appears in issue messages, e.g. `"plant"`.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    #[must_use]
    pub fn metadata(&self) -> &M {
        &self.metadata
    }
}

pub type BaseItemSchema = ItemSchema<OpenMetadata>;

/// The base item: `{id, category, variant, displayName, size, presentation, metadata?}`.
#[must_use]
pub const fn item_schema() -> BaseItemSchema {
    ItemSchema {
        name: "item",
        metadata: Optional(AnyJson),
    }
}

/// The base item with `metadata` required and validated by `metadata`.
#[must_use]
pub const fn create_item_type_with_metadata_schema<M: Schema>(metadata: M) -> ItemSchema<M> {
    ItemSchema::with_name("item", metadata)
}

impl<M: Schema> Schema for ItemSchema<M> {
    type Output = Item<M::Output>;

    fn describe(&self) -> String {
        self.name.to_string()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let id = fields.field("id", &StringSchema::non_empty(), ctx);
        let category = fields.field("category", &StringSchema::non_empty(), ctx);
        let variant = fields.field("variant", &StringSchema::any(), ctx);
        let display_name = fields.field("displayName", &StringSchema::non_empty(), ctx);
        let size = fields.field("size", &IntegerSchema::at_least(1), ctx);
        let presentation = fields.field("presentation", &PresentationSchema, ctx);
        let metadata = fields.field("metadata", &self.metadata, ctx);
        let exact = fields.finish(ctx);

        let (
            Some(id),
            Some(category),
            Some(variant),
            Some(display_name),
            Some(size),
            Some(presentation),
            Some(metadata),
            true,
        ) = (
            id,
            category,
            variant,
            display_name,
            size,
            presentation,
            metadata,
            exact,
        )
        else {
            return None;
        };
        Some(Item {
            id,
            category,
            variant,
            display_name,
            size,
            presentation,
            metadata,
        })
    }
}

/// Validates a [`Packet`] whose `metadata` is checked by `M`.
#[derive(Debug, Clone, Copy)]
pub struct PacketSchema<M> {
    name: &'static str,
    metadata: M,
}

impl<M: Schema> PacketSchema<M> {
    pub(crate) const fn with_name(name: &'static str, metadata: M) -> Self {
        Self { name, metadata }
    }

    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    #[must_use]
    pub fn metadata(&self) -> &M {
        &self.metadata
    }
}

pub type BasePacketSchema = PacketSchema<OpenMetadata>;

/// The base packet: `{id, name, description, category, presentation, expiresAt, metadata?}`.
#[must_use]
pub const fn packet_schema() -> BasePacketSchema {
    PacketSchema {
        name: "packet",
        metadata: Optional(AnyJson),
    }
}

/// The base packet with `metadata` required and validated by `metadata`.
#[must_use]
pub const fn create_packet_type_with_metadata_schema<M: Schema>(metadata: M) -> PacketSchema<M> {
    PacketSchema::with_name("packet", metadata)
}

impl<M: Schema> Schema for PacketSchema<M> {
    type Output = Packet<M::Output>;

    fn describe(&self) -> String {
        self.name.to_string()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let id = fields.field("id", &StringSchema::non_empty(), ctx);
        let name = fields.field("name", &StringSchema::non_empty(), ctx);
        let description = fields.field("description", &StringSchema::any(), ctx);
        let category = fields.field("category", &StringSchema::non_empty(), ctx);
        let presentation = fields.field("presentation", &PresentationSchema, ctx);
        let expires_at = fields.field("expiresAt", &DateTimeSchema, ctx);
        let metadata = fields.field("metadata", &self.metadata, ctx);
        let exact = fields.finish(ctx);

        let (
            Some(id),
            Some(name),
            Some(description),
            Some(category),
            Some(presentation),
            Some(expires_at),
            Some(metadata),
            true,
        ) = (
            id,
            name,
            description,
            category,
            presentation,
            expires_at,
            metadata,
            exact,
        )
        else {
            return None;
        };
        Some(Packet {
            id,
            name,
            description,
            category,
            presentation,
            expires_at,
            metadata,
        })
    }
}
