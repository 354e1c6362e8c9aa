//! JSON fixtures for boundary tests.

#![allow(dead_code)]

use serde_json::{json, Value};

pub fn plant(id: &str) -> Value {
    json!({
        "id": id,
        "category": "herb",
        "variant": "genovese",
        "displayName": "Basil",
        "size": 1,
        "presentation": {
            "iconPath": "/icons/basil.svg",
            "accentColor": {"red": 40, "green": 160, "blue": 60}
        },
        "metadata": {"plantingDistance": {"value": 30, "unit": "centimeters"}}
    })
}

pub fn garden(effects: Value) -> Value {
    json!({
        "id": "grdn_1",
        "indicators": [{"id": "indc_1", "effects": effects}],
        "zones": [{
            "id": "gbed_1",
            "name": "Herbs",
            "description": "",
            "width": 2,
            "height": 3,
            "placements": [
                {"id": "plcm_1", "position": {"x": 0, "y": 0}, "item": {"id": "plant_tomato"}, "sourceZoneId": "gbed_1"},
                {"id": "plcm_2", "position": {"x": 1, "y": 0}, "item": plant("plant_basil"), "sourceZoneId": "gbed_1"}
            ]
        }]
    })
}

/// April is 4..15 °C, May is 45..68 °F, August is 20..30 °C.
pub fn location(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Portland",
        "region": "Oregon",
        "country": "US",
        "monthlyTemperatures": [
            {"id": "mt_7", "month": 7, "temperatureRange": {"min": {"value": 20, "unit": "C"}, "max": {"value": 30, "unit": "C"}}},
            {"id": "mt_3", "month": 3, "temperatureRange": {"min": {"value": 4, "unit": "C"}, "max": {"value": 15, "unit": "C"}}},
            {"id": "mt_4", "month": 4, "temperatureRange": {"min": {"value": 45, "unit": "F"}, "max": {"value": 68, "unit": "F"}}}
        ]
    })
}
