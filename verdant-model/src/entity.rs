use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use verdant_types::{RgbColor, XyCoordinate};

/// Anything with an `id` that must be unique within its collection.
pub trait Identified {
    fn entity_id(&self) -> &str;
}

/// A `metadata` slot that may be empty.
///
/// Entities are generic over their metadata. The base shapes use
/// `Option<Value>` and omit the field when it is `None`; specialized metadata
/// types are always present and keep the default `is_absent`.
pub trait MetadataSlot: Serialize {
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T: Serialize> MetadataSlot for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl MetadataSlot for Value {}

/// How an item or packet is drawn: an icon and an accent color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub icon_path: String,
    pub accent_color: RgbColor,
}

/// A placeable thing, specialized through its metadata (e.g. a plant).
///
/// `M` is `Option<Value>` for the base shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", bound(serialize = "M: MetadataSlot"))]
pub struct Item<M = Option<Value>> {
    pub id: String,
    pub category: String,
    pub variant: String,
    pub display_name: String,
    pub size: i64,
    pub presentation: Presentation,
    #[serde(skip_serializing_if = "MetadataSlot::is_absent")]
    pub metadata: M,
}

/// A purchasable or storable unit, specialized through its metadata (e.g. a seed packet).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", bound(serialize = "M: MetadataSlot"))]
pub struct Packet<M = Option<Value>> {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub presentation: Presentation,
    pub expires_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "MetadataSlot::is_absent")]
    pub metadata: M,
}

/// One item bound to a position inside a zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPlacement<I> {
    pub id: String,
    pub position: XyCoordinate,
    pub item: I,
    pub source_zone_id: String,
}

/// A bounded rectangular area holding placements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", bound(serialize = "I: Serialize, M: MetadataSlot"))]
pub struct Zone<I, M = Option<Value>> {
    pub id: String,
    pub name: String,
    pub description: String,
    pub width: i64,
    pub height: i64,
    #[serde(skip_serializing_if = "MetadataSlot::is_absent")]
    pub metadata: M,
    pub placements: Vec<ItemPlacement<I>>,
}

/// The top-level aggregate: a garden with its zones and indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(
    rename_all = "camelCase",
    bound(serialize = "I: Serialize, M: MetadataSlot, ZM: MetadataSlot")
)]
pub struct Workspace<I, M = Option<Value>, ZM = Option<Value>> {
    pub id: String,
    #[serde(skip_serializing_if = "MetadataSlot::is_absent")]
    pub metadata: M,
    pub indicators: Vec<Indicator>,
    pub zones: Vec<Zone<I, ZM>>,
}

/// Relationship annotations between items, e.g. companion planting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    pub id: String,
    pub effects: Vec<IndicatorEffect>,
}

/// One directed effect. Items are referenced by id only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorEffect {
    pub source_id: String,
    pub target_id: String,
    pub description: String,
}

impl<M> Identified for Item<M> {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl<M> Identified for Packet<M> {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl<I> Identified for ItemPlacement<I> {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl<I, M> Identified for Zone<I, M> {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl<I, M, ZM> Identified for Workspace<I, M, ZM> {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Identified for Indicator {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl<I, M> Zone<I, M> {
    /// Number of grid cells covered by the zone.
    #[must_use]
    pub fn area(&self) -> i64 {
        self.width * self.height
    }

    #[must_use]
    pub fn placement(&self, id: &str) -> Option<&ItemPlacement<I>> {
        self.placements.iter().find(|placement| placement.id == id)
    }
}

impl<I, M, ZM> Workspace<I, M, ZM> {
    #[must_use]
    pub fn zone(&self, id: &str) -> Option<&Zone<I, ZM>> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// All placements across all zones, zone by zone.
    pub fn placements(&self) -> impl Iterator<Item = &ItemPlacement<I>> {
        self.zones.iter().flat_map(|zone| zone.placements.iter())
    }
}
