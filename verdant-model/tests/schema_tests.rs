use pretty_assertions::assert_eq;
use serde_json::json;
use verdant_model::{
    ArraySchema, Context, DateTimeSchema, DistanceSchema, EnumSchema, IntegerSchema, IssueCode,
    NumberSchema, Optional, RgbColorSchema, Schema, StringSchema, TemperatureRangeSchema,
    TemperatureSchema, XyCoordinateSchema,
};
use verdant_types::{Distance, DistanceUnit, Temperature, TemperatureUnit};

// ── strings ──────────────────────────────────────────────────────

#[test]
fn string_accepts_string() {
    assert_eq!(StringSchema::any().parse(&json!("")).unwrap(), "");
}

#[test]
fn string_rejects_number_without_coercion() {
    let err = StringSchema::any().parse(&json!(5)).unwrap_err();
    assert_eq!(err.issues().len(), 1);
    assert_eq!(err.issues()[0].message, "Expected string, received number");
    assert!(err.issues()[0].path.is_root());
}

#[test]
fn non_empty_string_rejects_empty() {
    let err = StringSchema::non_empty().parse(&json!("")).unwrap_err();
    assert!(matches!(err.issues()[0].code, IssueCode::TooSmall { .. }));
}

// ── numbers ──────────────────────────────────────────────────────

#[test]
fn number_rejects_numeric_string() {
    assert!(!NumberSchema::any().is_valid(&json!("3.5")));
}

#[test]
fn number_bounds_are_inclusive() {
    let schema = NumberSchema::between(0.0, 1.0);
    assert!(schema.is_valid(&json!(0)));
    assert!(schema.is_valid(&json!(1.0)));
    let err = schema.parse(&json!(1.5)).unwrap_err();
    assert_eq!(err.issues()[0].message, "Number must be less than or equal to 1");
}

#[test]
fn integer_accepts_whole_numbers() {
    assert_eq!(IntegerSchema::any().parse(&json!(7)).unwrap(), 7);
    assert_eq!(IntegerSchema::any().parse(&json!(7.0)).unwrap(), 7);
    assert_eq!(IntegerSchema::any().parse(&json!(-3)).unwrap(), -3);
}

#[test]
fn integer_rejects_fractions() {
    let err = IntegerSchema::any().parse(&json!(2.5)).unwrap_err();
    assert_eq!(err.issues()[0].message, "Expected integer, received float");
}

#[test]
fn integer_rejects_strings() {
    let err = IntegerSchema::any().parse(&json!("2")).unwrap_err();
    assert_eq!(
        err.issues()[0].code,
        IssueCode::InvalidType {
            expected: "integer".into(),
            received: "string".into()
        }
    );
}

#[test]
fn integer_minimum() {
    let err = IntegerSchema::at_least(1).parse(&json!(0)).unwrap_err();
    assert_eq!(err.issues()[0].message, "Number must be greater than or equal to 1");
}

#[test]
fn integer_beyond_exact_range_is_a_bounds_issue() {
    let err = IntegerSchema::any().parse(&json!(1e16)).unwrap_err();
    assert!(matches!(err.issues()[0].code, IssueCode::TooBig { .. }));
    assert_eq!(
        err.issues()[0].message,
        "Number must be less than or equal to 9007199254740991"
    );

    let err = IntegerSchema::any().parse(&json!(-1e16)).unwrap_err();
    assert!(matches!(err.issues()[0].code, IssueCode::TooSmall { .. }));

    let err = IntegerSchema::any().parse(&json!(u64::MAX)).unwrap_err();
    assert!(matches!(err.issues()[0].code, IssueCode::TooBig { .. }));
}

#[test]
fn whole_float_is_written_back_as_integer() {
    let int = IntegerSchema::any().parse(&json!(3.0)).unwrap();
    assert_eq!(serde_json::to_value(int).unwrap(), json!(3));
}

// ── enums and dates ──────────────────────────────────────────────

#[test]
fn enum_lists_options_on_mismatch() {
    let err = EnumSchema::<TemperatureUnit>::new().parse(&json!("K")).unwrap_err();
    assert_eq!(err.issues()[0].message, "Invalid enum value. Expected 'C' | 'F', received 'K'");
    assert_eq!(
        err.issues()[0].code,
        IssueCode::InvalidEnumValue {
            options: vec!["C".into(), "F".into()],
            received: "K".into()
        }
    );
}

#[test]
fn enum_is_case_sensitive() {
    assert!(!EnumSchema::<DistanceUnit>::new().is_valid(&json!("Feet")));
    assert_eq!(
        EnumSchema::<DistanceUnit>::new().parse(&json!("feet")).unwrap(),
        DistanceUnit::Feet
    );
}

#[test]
fn datetime_requires_rfc3339() {
    assert!(DateTimeSchema.is_valid(&json!("2027-03-01T00:00:00Z")));
    assert!(DateTimeSchema.is_valid(&json!("2027-03-01T02:00:00+02:00")));
    let err = DateTimeSchema.parse(&json!("March 1st")).unwrap_err();
    assert_eq!(err.issues()[0].code, IssueCode::InvalidDate);
}

#[test]
fn datetime_keeps_the_instant_but_not_the_offset() {
    let offset = DateTimeSchema.parse(&json!("2027-03-01T02:00:00+02:00")).unwrap();
    let utc = DateTimeSchema.parse(&json!("2027-03-01T00:00:00Z")).unwrap();
    assert_eq!(offset, utc);
    assert_eq!(serde_json::to_value(offset).unwrap(), json!("2027-03-01T00:00:00Z"));
}

// ── optional and arrays ──────────────────────────────────────────

#[test]
fn optional_field_may_be_absent_but_not_null() {
    let schema = RgbColorSchema;
    assert!(schema.is_valid(&json!({"red": 1, "green": 2, "blue": 3})));
    let err = schema
        .parse(&json!({"red": 1, "green": 2, "blue": 3, "alpha": null}))
        .unwrap_err();
    assert_eq!(err.paths(), vec!["alpha"]);
}

#[test]
fn optional_wraps_present_values() {
    let mut ctx = Context::new();
    let parsed = Optional(IntegerSchema::any()).check(&json!(4), &mut ctx);
    assert_eq!(parsed, Some(Some(4)));
    assert!(ctx.is_clean());
}

#[test]
fn array_reports_every_bad_element_by_index() {
    let err = ArraySchema::new(IntegerSchema::any())
        .parse(&json!([1, "two", 3, 4.5]))
        .unwrap_err();
    assert_eq!(err.paths(), vec!["1", "3"]);
}

#[test]
fn array_preserves_order() {
    let parsed = ArraySchema::new(StringSchema::any())
        .parse(&json!(["c", "a", "b"]))
        .unwrap();
    assert_eq!(parsed, vec!["c", "a", "b"]);
}

// ── value objects ────────────────────────────────────────────────

#[test]
fn distance_schema_parses() {
    let parsed = DistanceSchema.parse(&json!({"value": 18, "unit": "inches"})).unwrap();
    assert_eq!(parsed, Distance::new(18.0, DistanceUnit::Inches));
}

#[test]
fn distance_schema_reports_all_problems() {
    let err = DistanceSchema
        .parse(&json!({"value": "18", "unit": "furlongs", "note": 1}))
        .unwrap_err();
    assert_eq!(err.paths(), vec!["value", "unit", ""]);
    assert_eq!(
        err.issues()[2].code,
        IssueCode::UnrecognizedKeys { keys: vec!["note".into()] }
    );
}

#[test]
fn distance_missing_fields_are_required() {
    let err = DistanceSchema.parse(&json!({})).unwrap_err();
    assert_eq!(err.paths(), vec!["value", "unit"]);
    assert!(err.issues().iter().all(|issue| issue.code == IssueCode::Required));
}

#[test]
fn temperature_schema_accepts_record_and_pair() {
    assert_eq!(
        TemperatureSchema.parse(&json!({"value": 50, "unit": "F"})).unwrap(),
        Temperature::fahrenheit(50.0)
    );
    assert_eq!(
        TemperatureSchema.parse(&json!([4, "C"])).unwrap(),
        Temperature::celsius(4.0)
    );
}

#[test]
fn temperature_pair_must_have_two_elements() {
    assert!(!TemperatureSchema.is_valid(&json!([4])));
    let err = TemperatureSchema.parse(&json!([4, "K"])).unwrap_err();
    assert_eq!(err.paths(), vec!["1"]);
}

#[test]
fn temperature_range_rejects_inverted_bounds() {
    let err = TemperatureRangeSchema
        .parse(&json!({"min": {"value": 20, "unit": "C"}, "max": {"value": 50, "unit": "F"}}))
        .unwrap_err();
    assert_eq!(err.paths(), vec!["max"]);
}

#[test]
fn temperature_range_allows_equal_bounds_across_units() {
    assert!(TemperatureRangeSchema.is_valid(
        &json!({"min": {"value": 0, "unit": "C"}, "max": {"value": 32, "unit": "F"}})
    ));
}

#[test]
fn color_channels_are_bounded() {
    let err = RgbColorSchema
        .parse(&json!({"red": 256, "green": -1, "blue": 0, "alpha": 2}))
        .unwrap_err();
    assert_eq!(err.paths(), vec!["red", "green", "alpha"]);
}

#[test]
fn coordinate_requires_numbers() {
    assert!(XyCoordinateSchema.is_valid(&json!({"x": -1.5, "y": 0})));
    let err = XyCoordinateSchema.parse(&json!({"x": "1"})).unwrap_err();
    assert_eq!(err.paths(), vec!["x", "y"]);
}

#[test]
fn non_object_is_a_single_type_issue() {
    let err = DistanceSchema.parse(&json!([1, "feet"])).unwrap_err();
    assert_eq!(err.issues().len(), 1);
    assert_eq!(err.issues()[0].message, "Expected object, received array");
}

// ── error rendering ──────────────────────────────────────────────

#[test]
fn error_display_lists_every_issue() {
    let err = DistanceSchema.parse(&json!({"unit": "miles"})).unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("schema validation failed"));
    assert!(text.contains("value: Required"));
    assert!(text.contains("unit: Invalid enum value"));
}

#[test]
fn root_issue_renders_root_marker() {
    let err = StringSchema::any().parse(&json!(null)).unwrap_err();
    assert!(err.to_string().contains("(root): Expected string, received null"));
}

#[test]
fn issues_serialize_with_string_paths_and_codes() {
    let err = DistanceSchema
        .parse(&json!({"value": 1, "unit": "miles"}))
        .unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["issues"][0]["path"], "unit");
    assert_eq!(json["issues"][0]["code"], "invalid_enum_value");
    assert_eq!(json["issues"][0]["received"], "miles");
}
