use std::collections::HashSet;
use verdant_types::{EntityKind, Error, PrefixedId};

// ── generate ─────────────────────────────────────────────────────

#[test]
fn generated_ids_carry_kind_prefix() {
    let id = PrefixedId::generate(EntityKind::Plant);
    assert!(id.as_str().starts_with("plant_"));
    assert_eq!(id.prefix(), "plant");
    assert_eq!(id.suffix().len(), 32);
    assert!(id.is_kind(EntityKind::Plant));
    assert!(!id.is_kind(EntityKind::Zone));
}

#[test]
fn generated_ids_are_unique() {
    let ids: HashSet<_> = (0..100)
        .map(|_| PrefixedId::generate(EntityKind::Zone))
        .collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn kind_prefixes() {
    assert_eq!(EntityKind::Zone.prefix(), "gbed");
    assert_eq!(EntityKind::Workspace.prefix(), "grdn");
    assert_eq!(EntityKind::SeedPacket.to_string(), "seed");
}

// ── parse ────────────────────────────────────────────────────────

#[test]
fn parse_splits_at_first_underscore() {
    let id = PrefixedId::parse("plant_abc_123").unwrap();
    assert_eq!(id.prefix(), "plant");
    assert_eq!(id.suffix(), "abc_123");
}

#[test]
fn parse_rejects_missing_parts() {
    for bad in ["plant", "plant_", "_abc", "", "_"] {
        assert!(
            matches!(PrefixedId::parse(bad), Err(Error::InvalidIdentifier(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn parse_with_prefix_checks_prefix() {
    assert!(PrefixedId::parse_with_prefix("plant", "plant_abc123").is_ok());
    assert!(PrefixedId::parse_with_prefix("plant", "seed_abc123").is_err());
    assert!(PrefixedId::parse_with_prefix("plant", "plantabc").is_err());
    assert!(PrefixedId::parse_with_prefix("plant", "plants_abc").is_err());
}

#[test]
fn has_prefix_requires_suffix() {
    assert!(PrefixedId::has_prefix("gbed", "gbed_1"));
    assert!(!PrefixedId::has_prefix("gbed", "gbed_"));
    assert!(!PrefixedId::has_prefix("", "_1"));
}

#[test]
fn from_str_and_display_roundtrip() {
    let id: PrefixedId = "grdn_backyard".parse().unwrap();
    assert_eq!(id.to_string(), "grdn_backyard");
}

// ── serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_plain_string() {
    let id = PrefixedId::parse("plant_abc").unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), r#""plant_abc""#);
}

#[test]
fn deserialization_validates() {
    let ok: PrefixedId = serde_json::from_str(r#""indc_1""#).unwrap();
    assert_eq!(ok.prefix(), "indc");
    assert!(serde_json::from_str::<PrefixedId>(r#""nounderscore""#).is_err());
}
