//! Service configuration: a JSON file, environment overrides, then CLI flags.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{ServiceError, ServiceResult};
use crate::features::FeatureSet;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "VERDANT_LOG";
/// Environment variable holding `name=on|off` pairs, comma-separated.
pub const FEATURES_ENV: &str = "VERDANT_FEATURES";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// A `tracing_subscriber::EnvFilter` directive, e.g. `verdant_service=debug`.
    pub log_filter: String,
    /// Declared feature states. Layered over [`FeatureSet::defaults`].
    pub features: FeatureSet,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            features: FeatureSet::defaults(),
        }
    }
}

impl ServiceConfig {
    /// Loads a JSON config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> ServiceResult<Self> {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ServiceError::Config(format!("failed to read {}: {e}", path.display())))?;
        let mut config: Self = serde_json::from_str(&contents)?;
        config.features = FeatureSet::defaults().merged(&config.features);
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Defaults overridden by `VERDANT_LOG` and `VERDANT_FEATURES`.
    pub fn from_env() -> ServiceResult<Self> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies `VERDANT_LOG`/`VERDANT_FEATURES` as read by `lookup`.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ServiceResult<Self> {
        if let Some(filter) = lookup(LOG_ENV).filter(|filter| !filter.trim().is_empty()) {
            self.log_filter = filter;
        }
        if let Some(list) = lookup(FEATURES_ENV) {
            self.features = self.features.merged(&FeatureSet::parse_list(&list)?);
        }
        Ok(self)
    }
}
