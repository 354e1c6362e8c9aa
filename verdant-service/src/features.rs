//! Feature flags: a fixed name → enabled/disabled mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ServiceError;

/// Gates the planting-date calculation.
pub const PLANTING_DATE: &str = "planting-date";
/// Runs async refinements (e.g. indicator targets exist) after validation.
pub const STRICT_REFERENCES: &str = "strict-references";

/// Whether a feature is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureState {
    Enabled,
    Disabled,
}

impl FeatureState {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl fmt::Display for FeatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        })
    }
}

impl FromStr for FeatureState {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" | "enabled" | "true" | "1" => Ok(Self::Enabled),
            "off" | "disabled" | "false" | "0" => Ok(Self::Disabled),
            other => Err(ServiceError::invalid_argument(
                "feature state",
                format!("expected on or off, got '{other}'"),
            )),
        }
    }
}

/// Read access to feature flags.
pub trait FeatureLookup {
    /// The configured state, or `None` for a feature nobody declared.
    fn get_feature_state(&self, name: &str) -> Option<FeatureState>;

    /// True only for a declared, enabled feature.
    fn has_feature(&self, name: &str) -> bool {
        self.get_feature_state(name)
            .is_some_and(FeatureState::is_enabled)
    }
}

/// A fixed set of feature states, built once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet {
    states: BTreeMap<String, FeatureState>,
}

impl FeatureSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped defaults: planting dates on, strict references off.
    #[must_use]
    pub fn defaults() -> Self {
        Self::new()
            .with(PLANTING_DATE, FeatureState::Enabled)
            .with(STRICT_REFERENCES, FeatureState::Disabled)
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, state: FeatureState) -> Self {
        self.states.insert(name.into(), state);
        self
    }

    /// Overlays `other` on top of `self`; `other` wins on conflicts.
    #[must_use]
    pub fn merged(mut self, other: &FeatureSet) -> Self {
        for (name, state) in &other.states {
            self.states.insert(name.clone(), *state);
        }
        self
    }

    /// Parses `name=on,other=off`. Blank entries are skipped.
    pub fn parse_list(list: &str) -> Result<Self, ServiceError> {
        let mut set = Self::new();
        for entry in list.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            let Some((name, state)) = entry.split_once('=') else {
                return Err(ServiceError::invalid_argument(
                    "features",
                    format!("expected name=on|off, got '{entry}'"),
                ));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(ServiceError::invalid_argument(
                    "features",
                    format!("missing feature name in '{entry}'"),
                ));
            }
            set.states.insert(name.to_string(), state.parse()?);
        }
        Ok(set)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureState)> {
        self.states.iter().map(|(name, state)| (name.as_str(), *state))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FeatureLookup for FeatureSet {
    fn get_feature_state(&self, name: &str) -> Option<FeatureState> {
        self.states.get(name).copied()
    }
}
