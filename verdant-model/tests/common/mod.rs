//! Shared JSON fixtures for schema tests.

#![allow(dead_code)]

use serde_json::{json, Value};

pub fn presentation() -> Value {
    json!({
        "iconPath": "/icons/tomato.svg",
        "accentColor": {"red": 220, "green": 40, "blue": 30}
    })
}

/// A base item with no metadata.
pub fn item(id: &str) -> Value {
    json!({
        "id": id,
        "category": "vegetable",
        "variant": "cherry",
        "displayName": "Cherry Tomato",
        "size": 2,
        "presentation": presentation()
    })
}

/// A fully conformant plant.
pub fn plant(id: &str) -> Value {
    let mut value = item(id);
    value["metadata"] = json!({
        "plantingDistance": {"value": 18, "unit": "inches"}
    });
    value
}

pub fn seed_packet(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Cherry Tomato Seeds",
        "description": "Heirloom variety",
        "category": "vegetable",
        "presentation": presentation(),
        "expiresAt": "2027-03-01T00:00:00Z",
        "metadata": {
            "quantity": 50,
            "plantingInstructions": "Sow 1/4 inch deep after last frost",
            "netWeight": 0.5,
            "origin": "Italy"
        }
    })
}

pub fn placement(id: &str, zone_id: &str, item: Value) -> Value {
    json!({
        "id": id,
        "position": {"x": 1, "y": 2},
        "item": item,
        "sourceZoneId": zone_id
    })
}

pub fn zone(id: &str, placements: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": "Raised bed",
        "description": "South fence",
        "width": 4,
        "height": 8,
        "placements": placements
    })
}

pub fn indicator(id: &str) -> Value {
    json!({
        "id": id,
        "effects": [
            {"sourceId": "plant_basil", "targetId": "plant_tomato", "description": "Repels pests"}
        ]
    })
}

pub fn garden(id: &str, zones: Vec<Value>) -> Value {
    json!({
        "id": id,
        "indicators": [indicator("indc_1")],
        "zones": zones
    })
}

pub fn location() -> Value {
    json!({
        "id": "loc1",
        "name": "Portland",
        "region": "Oregon",
        "country": "US",
        "monthlyTemperatures": [
            {"id": "mt_3", "month": 3, "temperatureRange": {"min": {"value": 4, "unit": "C"}, "max": {"value": 15, "unit": "C"}}},
            {"id": "mt_4", "month": 4, "temperatureRange": {"min": {"value": 45, "unit": "F"}, "max": {"value": 68, "unit": "F"}}}
        ]
    })
}
