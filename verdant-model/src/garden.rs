//! Garden specializations: plants, seed packets and plant workspaces.

use serde::Serialize;
use serde_json::Value;
use verdant_types::Distance;

use crate::entity::{Item, MetadataSlot, Packet, Workspace, Zone};
use crate::item::{ItemSchema, OpenMetadata, PacketSchema};
use crate::layout::{
    create_workspace_schema_for_item_type, create_zone_schema_for_item_type, WorkspaceSchema,
    ZoneSchema,
};
use crate::primitive::{AnyJson, IntegerSchema, NumberSchema, Optional, StringSchema};
use crate::reference::{ref_or_embed, RefOrEmbed, RefOrEmbedSchema};
use crate::schema::{Context, ObjectFields, Schema};
use crate::values::DistanceSchema;

/// What makes an item a plant: how far apart to plant it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantMetadata {
    pub planting_distance: Distance,
}

impl MetadataSlot for PlantMetadata {}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlantMetadataSchema;

impl Schema for PlantMetadataSchema {
    type Output = PlantMetadata;

    fn describe(&self) -> String {
        "plant metadata".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<PlantMetadata> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let planting_distance = fields.field("plantingDistance", &DistanceSchema, ctx);
        let exact = fields.finish(ctx);
        let (Some(planting_distance), true) = (planting_distance, exact) else {
            return None;
        };
        Some(PlantMetadata { planting_distance })
    }
}

/// What makes a packet a seed packet. `net_weight` is in grams.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedPacketMetadata {
    pub quantity: i64,
    pub planting_instructions: String,
    pub net_weight: f64,
    pub origin: String,
}

impl MetadataSlot for SeedPacketMetadata {}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeedPacketMetadataSchema;

impl Schema for SeedPacketMetadataSchema {
    type Output = SeedPacketMetadata;

    fn describe(&self) -> String {
        "seed packet metadata".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<SeedPacketMetadata> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let quantity = fields.field("quantity", &IntegerSchema::at_least(0), ctx);
        let planting_instructions = fields.field("plantingInstructions", &StringSchema::any(), ctx);
        let net_weight = fields.field("netWeight", &NumberSchema::non_negative(), ctx);
        let origin = fields.field("origin", &StringSchema::any(), ctx);
        let exact = fields.finish(ctx);

        let (Some(quantity), Some(planting_instructions), Some(net_weight), Some(origin), true) =
            (quantity, planting_instructions, net_weight, origin, exact)
        else {
            return None;
        };
        Some(SeedPacketMetadata {
            quantity,
            planting_instructions,
            net_weight,
            origin,
        })
    }
}

pub type Plant = Item<PlantMetadata>;
pub type SeedPacket = Packet<SeedPacketMetadata>;
pub type PlantSchema = ItemSchema<PlantMetadataSchema>;
pub type SeedPacketSchema = PacketSchema<SeedPacketMetadataSchema>;

/// A plant relation: `{id: "plant_…"}` or a full plant.
pub type PlantRefSchema = RefOrEmbedSchema<PlantSchema>;
pub type GardenBedSchema = ZoneSchema<PlantRefSchema, OpenMetadata>;
pub type GardenSchema = WorkspaceSchema<PlantRefSchema, OpenMetadata, OpenMetadata>;
pub type GardenBed = Zone<RefOrEmbed<Plant>>;
pub type Garden = Workspace<RefOrEmbed<Plant>>;

#[must_use]
pub const fn plant_schema() -> PlantSchema {
    ItemSchema::with_name("plant", PlantMetadataSchema)
}

#[must_use]
pub const fn seed_packet_schema() -> SeedPacketSchema {
    PacketSchema::with_name("seed packet", SeedPacketMetadataSchema)
}

#[must_use]
pub const fn plant_ref_schema() -> PlantRefSchema {
    ref_or_embed("plant", plant_schema())
}

#[must_use]
pub const fn garden_bed_schema() -> GardenBedSchema {
    create_zone_schema_for_item_type(plant_ref_schema(), Optional(AnyJson))
}

#[must_use]
pub const fn garden_schema() -> GardenSchema {
    create_workspace_schema_for_item_type(plant_ref_schema(), Optional(AnyJson), Optional(AnyJson))
}
