//! Prefixed identifiers used throughout Verdant.
//!
//! An identifier is `<prefix>_<suffix>`: the prefix names the entity kind
//! (`plant`, `gbed`, `grdn`, ...) and the suffix is opaque. Generated
//! suffixes are UUID v7 in simple hex form, so identifiers sort by creation time.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::Error;

/// Kinds of entity that carry a prefixed identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Item,
    Plant,
    Packet,
    SeedPacket,
    Placement,
    Zone,
    Workspace,
    Indicator,
    Location,
}

impl EntityKind {
    /// The identifier prefix for this kind, without the trailing underscore.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            EntityKind::Item => "item",
            EntityKind::Plant => "plant",
            EntityKind::Packet => "pckt",
            EntityKind::SeedPacket => "seed",
            EntityKind::Placement => "plcm",
            EntityKind::Zone => "gbed",
            EntityKind::Workspace => "grdn",
            EntityKind::Indicator => "indc",
            EntityKind::Location => "locn",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// An identifier of the form `<prefix>_<suffix>` with both parts non-empty.
///
/// The prefix ends at the first underscore; the suffix may contain more.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrefixedId(String);

impl PrefixedId {
    /// Creates a fresh identifier for the given kind.
    #[must_use]
    pub fn generate(kind: EntityKind) -> Self {
        Self(format!("{}_{}", kind.prefix(), Uuid::now_v7().simple()))
    }

    /// Parses any well-formed prefixed identifier.
    pub fn parse(s: &str) -> crate::Result<Self> {
        match s.split_once('_') {
            Some((prefix, suffix)) if !prefix.is_empty() && !suffix.is_empty() => {
                Ok(Self(s.to_string()))
            }
            _ => Err(Error::InvalidIdentifier(s.to_string())),
        }
    }

    /// Parses an identifier that must start with `<prefix>_`.
    pub fn parse_with_prefix(prefix: &str, s: &str) -> crate::Result<Self> {
        if Self::has_prefix(prefix, s) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidIdentifier(format!(
                "{s:?} does not match {prefix}_<id>"
            )))
        }
    }

    /// Whether `s` is `<prefix>_` followed by at least one character.
    #[must_use]
    pub fn has_prefix(prefix: &str, s: &str) -> bool {
        !prefix.is_empty()
            && s.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('_'))
                .is_some_and(|suffix| !suffix.is_empty())
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        self.0.split_once('_').map_or("", |(prefix, _)| prefix)
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        self.0.split_once('_').map_or("", |(_, suffix)| suffix)
    }

    #[must_use]
    pub fn is_kind(&self, kind: EntityKind) -> bool {
        self.prefix() == kind.prefix()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrefixedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PrefixedId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PrefixedId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for PrefixedId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PrefixedId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
