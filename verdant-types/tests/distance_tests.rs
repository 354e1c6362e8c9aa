use pretty_assertions::assert_eq;
use verdant_types::{
    convert_distance_to_feet, convert_raw_distance_to_feet, Distance, DistanceUnit, Error,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── convert_distance_to_feet ─────────────────────────────────────

#[test]
fn twelve_inches_is_one_foot() {
    let feet = convert_distance_to_feet(Distance::new(12.0, DistanceUnit::Inches));
    assert_eq!(feet, Distance::new(1.0, DistanceUnit::Feet));
}

#[test]
fn two_yards_is_six_feet() {
    let feet = convert_distance_to_feet(Distance::new(2.0, DistanceUnit::Yards));
    assert_eq!(feet, Distance::new(6.0, DistanceUnit::Feet));
}

#[test]
fn feet_are_unchanged() {
    let d = Distance::feet(4.5);
    assert_eq!(convert_distance_to_feet(d), d);
}

#[test]
fn meters_use_fixed_factor() {
    let feet = convert_distance_to_feet(Distance::new(1.0, DistanceUnit::Meters));
    assert_eq!(feet.unit, DistanceUnit::Feet);
    assert!(close(feet.value, 3.28084));
}

#[test]
fn centimeters_use_fixed_factor() {
    let feet = convert_distance_to_feet(Distance::new(100.0, DistanceUnit::Centimeters));
    assert_eq!(feet.unit, DistanceUnit::Feet);
    assert!(close(feet.value, 3.28084));
}

#[test]
fn every_unit_converts_to_feet() {
    for unit in DistanceUnit::ALL {
        let converted = convert_distance_to_feet(Distance::new(7.0, unit));
        assert_eq!(converted.unit, DistanceUnit::Feet, "unit {unit}");
    }
}

#[test]
fn negative_and_zero_values_convert() {
    assert_eq!(
        convert_distance_to_feet(Distance::new(0.0, DistanceUnit::Yards)).value,
        0.0
    );
    assert_eq!(
        convert_distance_to_feet(Distance::new(-24.0, DistanceUnit::Inches)).value,
        -2.0
    );
}

// ── to_unit ──────────────────────────────────────────────────────

#[test]
fn to_unit_routes_through_feet() {
    let inches = Distance::new(1.0, DistanceUnit::Yards).to_unit(DistanceUnit::Inches);
    assert_eq!(inches.unit, DistanceUnit::Inches);
    assert!(close(inches.value, 36.0));

    let meters = Distance::feet(3.28084).to_unit(DistanceUnit::Meters);
    assert!(close(meters.value, 1.0));
}

// ── raw units ────────────────────────────────────────────────────

#[test]
fn raw_unit_text_converts() {
    let feet = convert_raw_distance_to_feet(36.0, "inches").unwrap();
    assert_eq!(feet, Distance::feet(3.0));
}

#[test]
fn unknown_unit_text_is_unsupported() {
    let err = convert_raw_distance_to_feet(1.0, "furlongs").unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedUnit {
            kind: "distance",
            unit: "furlongs".into()
        }
    );
    assert!(err.to_string().contains("furlongs"));
}

#[test]
fn unit_parsing_is_case_sensitive() {
    assert!("Feet".parse::<DistanceUnit>().is_err());
    assert_eq!("feet".parse::<DistanceUnit>().unwrap(), DistanceUnit::Feet);
}

// ── serde ────────────────────────────────────────────────────────

#[test]
fn distance_serializes_with_lowercase_unit() {
    let json = serde_json::to_value(Distance::new(18.0, DistanceUnit::Inches)).unwrap();
    assert_eq!(json, serde_json::json!({"value": 18.0, "unit": "inches"}));
}

#[test]
fn distance_rejects_unknown_fields() {
    let parsed: Result<Distance, _> =
        serde_json::from_str(r#"{"value": 1, "unit": "feet", "extra": true}"#);
    assert!(parsed.is_err());
}

#[test]
fn distance_display() {
    assert_eq!(Distance::new(2.5, DistanceUnit::Meters).to_string(), "2.5 meters");
}
