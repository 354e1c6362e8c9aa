//! Process-wide schema instances, predicates and response shapes.
//!
//! Every schema here is built at compile time and never mutated, so the
//! statics can be shared by any number of request handlers.

use serde_json::Value;

use crate::garden::{
    garden_bed_schema, garden_schema, plant_schema, seed_packet_schema, GardenBedSchema,
    GardenSchema, PlantMetadataSchema, PlantSchema, SeedPacketMetadataSchema, SeedPacketSchema,
};
use crate::item::{item_schema, packet_schema, BaseItemSchema, BasePacketSchema};
use crate::layout::{
    item_placement_schema, workspace_schema, zone_schema, BaseItemPlacementSchema,
    BaseWorkspaceSchema, BaseZoneSchema, IndicatorSchema,
};
use crate::location::LocationSchema;
use crate::primitive::EntityListSchema;
use crate::schema::Schema;

pub static ITEM_SCHEMA: BaseItemSchema = item_schema();
pub static PACKET_SCHEMA: BasePacketSchema = packet_schema();
pub static ITEM_PLACEMENT_SCHEMA: BaseItemPlacementSchema = item_placement_schema();
pub static ZONE_SCHEMA: BaseZoneSchema = zone_schema();
pub static WORKSPACE_SCHEMA: BaseWorkspaceSchema = workspace_schema();
pub static INDICATOR_SCHEMA: IndicatorSchema = IndicatorSchema;
pub static LOCATION_SCHEMA: LocationSchema = LocationSchema;

pub static PLANT_METADATA_SCHEMA: PlantMetadataSchema = PlantMetadataSchema;
pub static PLANT_SCHEMA: PlantSchema = plant_schema();
pub static SEED_PACKET_METADATA_SCHEMA: SeedPacketMetadataSchema = SeedPacketMetadataSchema;
pub static SEED_PACKET_SCHEMA: SeedPacketSchema = seed_packet_schema();
pub static GARDEN_BED_SCHEMA: GardenBedSchema = garden_bed_schema();
pub static GARDEN_SCHEMA: GardenSchema = garden_schema();

/// Response shape for listing items: an ordered sequence of `item`.
#[must_use]
pub const fn list_items_response_schema<S: Schema>(item: S) -> EntityListSchema<S> {
    EntityListSchema::new(item)
}

/// Response shape for listing workspaces: an ordered sequence of `workspace`.
#[must_use]
pub const fn list_workspaces_response_schema<S: Schema>(workspace: S) -> EntityListSchema<S> {
    EntityListSchema::new(workspace)
}

pub static LIST_PLANTS_RESPONSE_SCHEMA: EntityListSchema<PlantSchema> =
    list_items_response_schema(plant_schema());
pub static LIST_GARDENS_RESPONSE_SCHEMA: EntityListSchema<GardenSchema> =
    list_workspaces_response_schema(garden_schema());

#[must_use]
pub fn is_item(value: &Value) -> bool {
    ITEM_SCHEMA.is_valid(value)
}

#[must_use]
pub fn is_packet(value: &Value) -> bool {
    PACKET_SCHEMA.is_valid(value)
}

#[must_use]
pub fn is_item_placement(value: &Value) -> bool {
    ITEM_PLACEMENT_SCHEMA.is_valid(value)
}

#[must_use]
pub fn is_zone(value: &Value) -> bool {
    ZONE_SCHEMA.is_valid(value)
}

#[must_use]
pub fn is_workspace(value: &Value) -> bool {
    WORKSPACE_SCHEMA.is_valid(value)
}

#[must_use]
pub fn is_indicator(value: &Value) -> bool {
    INDICATOR_SCHEMA.is_valid(value)
}

#[must_use]
pub fn is_location(value: &Value) -> bool {
    LOCATION_SCHEMA.is_valid(value)
}

#[must_use]
pub fn is_plant(value: &Value) -> bool {
    PLANT_SCHEMA.is_valid(value)
}

#[must_use]
pub fn is_plant_metadata(value: &Value) -> bool {
    PLANT_METADATA_SCHEMA.is_valid(value)
}

#[must_use]
pub fn is_seed_packet(value: &Value) -> bool {
    SEED_PACKET_SCHEMA.is_valid(value)
}

#[must_use]
pub fn is_seed_packet_metadata(value: &Value) -> bool {
    SEED_PACKET_METADATA_SCHEMA.is_valid(value)
}

#[must_use]
pub fn is_garden(value: &Value) -> bool {
    GARDEN_SCHEMA.is_valid(value)
}
