mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use verdant_model::{IssueCode, Schema, LIST_PLANTS_RESPONSE_SCHEMA, PLANT_SCHEMA};
use verdant_service::{
    parse_inbound, require_param, respond_with_error, validate_outbound, ErrorResponse,
    ServiceError,
};

// ── inbound ──────────────────────────────────────────────────────

#[test]
fn inbound_plant_parses() {
    let body = common::plant("plant_basil").to_string();
    let plant = parse_inbound(&PLANT_SCHEMA, &body).unwrap();
    assert_eq!(plant.display_name, "Basil");
}

#[test]
fn inbound_schema_failure_is_a_client_error() {
    let mut value = common::plant("plant_basil");
    value["metadata"]["plantingDistance"]["unit"] = json!("rods");
    let err = parse_inbound(&PLANT_SCHEMA, &value.to_string()).unwrap_err();

    assert!(matches!(err, ServiceError::SchemaValidation(_)));
    assert_eq!(err.status(), 400);

    let response = respond_with_error(&err);
    assert_eq!(response.status, 400);
    assert_eq!(response.error, "validation failed");
    assert_eq!(response.issues.len(), 1);
    assert_eq!(
        response.issues[0].path.to_string(),
        "metadata.plantingDistance.unit"
    );
}

#[test]
fn malformed_json_is_a_client_error() {
    let err = parse_inbound(&PLANT_SCHEMA, "{not json").unwrap_err();
    assert!(matches!(err, ServiceError::Serialization(_)));
    assert_eq!(respond_with_error(&err).status, 400);
}

// ── outbound ─────────────────────────────────────────────────────

#[test]
fn outbound_list_is_shaped_and_checked() {
    let plants = vec![
        PLANT_SCHEMA.parse(&common::plant("plant_a")).unwrap(),
        PLANT_SCHEMA.parse(&common::plant("plant_b")).unwrap(),
    ];
    let value = validate_outbound(&LIST_PLANTS_RESPONSE_SCHEMA, &plants).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["id"], "plant_b");
}

#[test]
fn outbound_duplicates_are_caught() {
    let plant = PLANT_SCHEMA.parse(&common::plant("plant_a")).unwrap();
    let err = validate_outbound(&LIST_PLANTS_RESPONSE_SCHEMA, &vec![plant.clone(), plant])
        .unwrap_err();
    let ServiceError::SchemaValidation(validation) = &err else {
        panic!("expected a validation error, got {err:?}");
    };
    assert_eq!(
        validation.issues()[0].code,
        IssueCode::DuplicateId {
            id: "plant_a".into()
        }
    );
}

// ── parameters ───────────────────────────────────────────────────

#[test]
fn required_param_present() {
    assert_eq!(require_param("locationId", Some(" loc1 ")).unwrap(), "loc1");
}

#[test]
fn required_param_missing_or_blank() {
    let missing = require_param("locationId", None).unwrap_err();
    assert_eq!(missing.to_string(), "invalid argument 'locationId': is required");
    assert_eq!(missing.status(), 400);

    let blank = require_param("locationId", Some("  ")).unwrap_err();
    assert_eq!(
        blank.to_string(),
        "invalid argument 'locationId': must not be blank"
    );
}

// ── translation ──────────────────────────────────────────────────

#[test]
fn statuses_follow_error_class() {
    let unit: verdant_types::Error = "parsecs".parse::<verdant_types::DistanceUnit>().unwrap_err();
    let cases = [
        (ServiceError::invalid_argument("year", "bad"), 400),
        (ServiceError::UnsupportedUnit(unit), 500),
        (ServiceError::async_validation("lookup timed out"), 500),
        (
            ServiceError::NotFound {
                kind: "location",
                id: "loc9".into(),
            },
            404,
        ),
        (ServiceError::Config("unreadable".into()), 500),
    ];
    for (error, status) in cases {
        assert_eq!(error.status(), status, "{error}");
    }
}

#[test]
fn server_faults_hide_detail() {
    let unit = "K".parse::<verdant_types::TemperatureUnit>().unwrap_err();
    let response = ErrorResponse::from(&ServiceError::from(unit));
    assert_eq!(
        response,
        ErrorResponse {
            status: 500,
            error: "internal error".into(),
            issues: vec![],
        }
    );
}

#[test]
fn not_found_keeps_its_message() {
    let err = ServiceError::NotFound {
        kind: "location",
        id: "loc9".into(),
    };
    let response = respond_with_error(&err);
    assert_eq!(response.status, 404);
    assert_eq!(response.error, "location not found: loc9");
}

#[test]
fn error_response_serializes_issues() {
    let err = parse_inbound(&PLANT_SCHEMA, r#"{"id": "plant_1"}"#).unwrap_err();
    let body = serde_json::to_value(respond_with_error(&err)).unwrap();
    assert_eq!(body["status"], 400);
    assert_eq!(body["issues"][0]["path"], "category");
    assert_eq!(body["issues"][0]["code"], "required");

    let roundtrip: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(roundtrip.issues.len(), 6);
}

#[test]
fn error_response_without_issues_omits_them() {
    let body = serde_json::to_value(ErrorResponse::from(&ServiceError::invalid_argument(
        "year", "bad",
    )))
    .unwrap();
    assert!(body.get("issues").is_none());
}
