//! Entity schemas for Verdant.
//!
//! Defines the garden entity hierarchy as composable validation schemas:
//! - [`Schema`]: validates untrusted JSON into a typed value, collecting every [`Issue`]
//! - Base shapes for [`Item`], [`Packet`], [`ItemPlacement`], [`Zone`], [`Workspace`],
//!   [`Indicator`] and [`Location`]
//! - Factories that specialize them: item/packet metadata, and zones/workspaces
//!   parameterized by item type (`create_*_schema_*`)
//! - [`RefOrEmbedSchema`]: relation fields that accept a prefixed reference or an
//!   embedded value
//! - Garden specializations: [`Plant`], [`SeedPacket`], [`Garden`]
//!
//! Schemas are stateless and perform no I/O. A failed validation is reported as
//! a [`SchemaValidationError`] and never logged or swallowed here.

mod entity;
mod error;
mod garden;
mod issue;
mod item;
mod layout;
mod location;
mod primitive;
mod reference;
mod schema;
mod shapes;
mod values;

pub use entity::{
    Identified, Indicator, IndicatorEffect, Item, ItemPlacement, MetadataSlot, Packet,
    Presentation, Workspace, Zone,
};
pub use error::{ModelResult, SchemaValidationError};
pub use garden::{
    garden_bed_schema, garden_schema, plant_ref_schema, plant_schema, seed_packet_schema, Garden,
    GardenBed, GardenBedSchema, GardenSchema, Plant, PlantMetadata, PlantMetadataSchema,
    PlantRefSchema, PlantSchema, SeedPacket, SeedPacketMetadata, SeedPacketMetadataSchema,
    SeedPacketSchema,
};
pub use issue::{FieldPath, Issue, IssueCode, PathSegment, UnionBranch};
pub use item::{
    create_item_type_with_metadata_schema, create_packet_type_with_metadata_schema, item_schema,
    packet_schema, BaseItemSchema, BasePacketSchema, ItemSchema, OpenMetadata, PacketSchema,
};
pub use layout::{
    create_item_placement_schema_for_item_type, create_workspace_schema_for_item_type,
    create_zone_schema_for_item_type, item_placement_schema, workspace_schema, zone_schema,
    BaseItemPlacementSchema, BaseWorkspaceSchema, BaseZoneSchema, IndicatorEffectSchema,
    IndicatorSchema, ItemPlacementSchema, WorkspaceSchema, ZoneSchema,
};
pub use location::{Location, LocationSchema, MonthlyTemperature, MonthlyTemperatureSchema, MONTH_NAMES};
pub use primitive::{
    AnyJson, ArraySchema, DateTimeSchema, EntityListSchema, EnumSchema, IntegerSchema,
    NumberSchema, Optional, StringSchema, WireEnum,
};
pub use reference::{
    ref_or_embed, refs_or_embed_many, RefOrEmbed, RefOrEmbedSchema, Reference, RefsOrEmbedMany,
    RefsOrEmbedManySchema,
};
pub use schema::{json_type, Context, ObjectFields, Schema};
pub use shapes::*;
pub use values::{
    DistanceSchema, PresentationSchema, RgbColorSchema, TemperatureRangeSchema,
    TemperatureSchema, XyCoordinateSchema,
};
