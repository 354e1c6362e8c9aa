//! Placement, zone, workspace and indicator schemas.
//!
//! Each schema is generic over the schema of the items it carries, so a
//! workspace of plants and a workspace of seed packets share one definition.

use serde_json::Value;

use crate::entity::{Indicator, IndicatorEffect, ItemPlacement, Workspace, Zone};
use crate::item::{item_schema, BaseItemSchema, OpenMetadata};
use crate::primitive::{AnyJson, ArraySchema, EntityListSchema, IntegerSchema, Optional, StringSchema};
use crate::reference::{ref_or_embed, RefOrEmbedSchema};
use crate::schema::{Context, ObjectFields, Schema};
use crate::values::XyCoordinateSchema;

/// Validates an [`ItemPlacement`] whose `item` is checked by `I`.
#[derive(Debug, Clone, Copy)]
pub struct ItemPlacementSchema<I> {
    item: I,
}

impl<I: Schema> ItemPlacementSchema<I> {
    #[must_use]
    pub fn item(&self) -> &I {
        &self.item
    }
}

/// Base placements reference or embed a base item under the `item` prefix.
pub type BaseItemPlacementSchema = ItemPlacementSchema<RefOrEmbedSchema<BaseItemSchema>>;

/// The base placement: `{id, position, item: item-or-ref, sourceZoneId}`.
#[must_use]
pub const fn item_placement_schema() -> BaseItemPlacementSchema {
    ItemPlacementSchema {
        item: ref_or_embed("item", item_schema()),
    }
}

/// The base placement with `item` validated by `item`.
#[must_use]
pub const fn create_item_placement_schema_for_item_type<I: Schema>(
    item: I,
) -> ItemPlacementSchema<I> {
    ItemPlacementSchema { item }
}

impl<I: Schema> Schema for ItemPlacementSchema<I> {
    type Output = ItemPlacement<I::Output>;

    fn describe(&self) -> String {
        format!("placement of {}", self.item.describe())
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let id = fields.field("id", &StringSchema::non_empty(), ctx);
        let position = fields.field("position", &XyCoordinateSchema, ctx);
        let item = fields.field("item", &self.item, ctx);
        let source_zone_id = fields.field("sourceZoneId", &StringSchema::non_empty(), ctx);
        let exact = fields.finish(ctx);

        let (Some(id), Some(position), Some(item), Some(source_zone_id), true) =
            (id, position, item, source_zone_id, exact)
        else {
            return None;
        };
        Some(ItemPlacement {
            id,
            position,
            item,
            source_zone_id,
        })
    }
}

/// Validates a [`Zone`] of `I` items with metadata checked by `M`.
#[derive(Debug, Clone, Copy)]
pub struct ZoneSchema<I, M> {
    placements: EntityListSchema<ItemPlacementSchema<I>>,
    metadata: M,
}

impl<I: Schema, M: Schema> ZoneSchema<I, M> {
    #[must_use]
    pub fn placement(&self) -> &ItemPlacementSchema<I> {
        self.placements.element()
    }
}

pub type BaseZoneSchema = ZoneSchema<RefOrEmbedSchema<BaseItemSchema>, OpenMetadata>;

/// The base zone: `{id, name, description, width, height, metadata?, placements}`.
#[must_use]
pub const fn zone_schema() -> BaseZoneSchema {
    ZoneSchema {
        placements: EntityListSchema::new(item_placement_schema()),
        metadata: Optional(AnyJson),
    }
}

/// A zone whose placements carry `item`-validated items and whose `metadata`
/// is required and validated by `zone_metadata`.
#[must_use]
pub const fn create_zone_schema_for_item_type<I: Schema, M: Schema>(
    item: I,
    zone_metadata: M,
) -> ZoneSchema<I, M> {
    ZoneSchema {
        placements: EntityListSchema::new(create_item_placement_schema_for_item_type(item)),
        metadata: zone_metadata,
    }
}

const DIMENSION: IntegerSchema = IntegerSchema::at_least(1);

impl<I, M> Schema for ZoneSchema<I, M>
where
    I: Schema,
    M: Schema,
{
    type Output = Zone<I::Output, M::Output>;

    fn describe(&self) -> String {
        "zone".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let id = fields.field("id", &StringSchema::non_empty(), ctx);
        let name = fields.field("name", &StringSchema::non_empty(), ctx);
        let description = fields.field("description", &StringSchema::any(), ctx);
        let width = fields.field("width", &DIMENSION, ctx);
        let height = fields.field("height", &DIMENSION, ctx);
        let metadata = fields.field("metadata", &self.metadata, ctx);
        let placements = fields.field("placements", &self.placements, ctx);
        let exact = fields.finish(ctx);

        let (
            Some(id),
            Some(name),
            Some(description),
            Some(width),
            Some(height),
            Some(metadata),
            Some(placements),
            true,
        ) = (
            id,
            name,
            description,
            width,
            height,
            metadata,
            placements,
            exact,
        )
        else {
            return None;
        };
        Some(Zone {
            id,
            name,
            description,
            width,
            height,
            metadata,
            placements,
        })
    }
}

/// Validates a [`Workspace`] of `I` items, with workspace metadata checked by
/// `M` and zone metadata checked by `ZM`.
#[derive(Debug, Clone, Copy)]
pub struct WorkspaceSchema<I, M, ZM> {
    zones: EntityListSchema<ZoneSchema<I, ZM>>,
    metadata: M,
}

impl<I: Schema, M: Schema, ZM: Schema> WorkspaceSchema<I, M, ZM> {
    #[must_use]
    pub fn zone(&self) -> &ZoneSchema<I, ZM> {
        self.zones.element()
    }
}

pub type BaseWorkspaceSchema =
    WorkspaceSchema<RefOrEmbedSchema<BaseItemSchema>, OpenMetadata, OpenMetadata>;

/// The base workspace: `{id, metadata?, indicators, zones}`.
#[must_use]
pub const fn workspace_schema() -> BaseWorkspaceSchema {
    WorkspaceSchema {
        zones: EntityListSchema::new(zone_schema()),
        metadata: Optional(AnyJson),
    }
}

/// A workspace whose zones and placements all carry `item`-validated items.
#[must_use]
pub const fn create_workspace_schema_for_item_type<I: Schema, M: Schema, ZM: Schema>(
    item: I,
    workspace_metadata: M,
    zone_metadata: ZM,
) -> WorkspaceSchema<I, M, ZM> {
    WorkspaceSchema {
        zones: EntityListSchema::new(create_zone_schema_for_item_type(item, zone_metadata)),
        metadata: workspace_metadata,
    }
}

const INDICATORS: EntityListSchema<IndicatorSchema> = EntityListSchema::new(IndicatorSchema);

impl<I, M, ZM> Schema for WorkspaceSchema<I, M, ZM>
where
    I: Schema,
    M: Schema,
    ZM: Schema,
{
    type Output = Workspace<I::Output, M::Output, ZM::Output>;

    fn describe(&self) -> String {
        "workspace".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Self::Output> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let id = fields.field("id", &StringSchema::non_empty(), ctx);
        let metadata = fields.field("metadata", &self.metadata, ctx);
        let indicators = fields.field("indicators", &INDICATORS, ctx);
        let zones = fields.field("zones", &self.zones, ctx);
        let exact = fields.finish(ctx);

        let (Some(id), Some(metadata), Some(indicators), Some(zones), true) =
            (id, metadata, indicators, zones, exact)
        else {
            return None;
        };
        Some(Workspace {
            id,
            metadata,
            indicators,
            zones,
        })
    }
}

/// `{id, effects: [{sourceId, targetId, description}]}`
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorSchema;

impl Schema for IndicatorSchema {
    type Output = Indicator;

    fn describe(&self) -> String {
        "indicator".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Indicator> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let id = fields.field("id", &StringSchema::non_empty(), ctx);
        let effects = fields.field("effects", &ArraySchema::new(IndicatorEffectSchema), ctx);
        let exact = fields.finish(ctx);

        let (Some(id), Some(effects), true) = (id, effects, exact) else {
            return None;
        };
        Some(Indicator { id, effects })
    }
}

/// `{sourceId, targetId, description}`
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorEffectSchema;

impl Schema for IndicatorEffectSchema {
    type Output = IndicatorEffect;

    fn describe(&self) -> String {
        "indicator effect".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<IndicatorEffect> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let source_id = fields.field("sourceId", &StringSchema::non_empty(), ctx);
        let target_id = fields.field("targetId", &StringSchema::non_empty(), ctx);
        let description = fields.field("description", &StringSchema::any(), ctx);
        let exact = fields.finish(ctx);

        let (Some(source_id), Some(target_id), Some(description), true) =
            (source_id, target_id, description, exact)
        else {
            return None;
        };
        Some(IndicatorEffect {
            source_id,
            target_id,
            description,
        })
    }
}
