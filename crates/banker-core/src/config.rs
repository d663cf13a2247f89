//! Runtime configuration: table capacity, resource width and scan order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BankerError, Result};
use crate::safety::ScanOrder;

/// Number of resource types when nothing else is configured.
pub const DEFAULT_RESOURCE_COUNT: usize = 3;

/// Upper bound on the process table when nothing else is configured.
pub const DEFAULT_MAX_PROCESSES: usize = 1000;

/// Prefix for environment overrides, e.g. `BANKER_MAX_PROCESSES=16`.
pub const ENV_PREFIX: &str = "BANKER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankerConfig {
    pub resource_count: usize,
    pub max_processes: usize,
    pub scan_order: ScanOrder,
}

impl Default for BankerConfig {
    fn default() -> Self {
        Self {
            resource_count: DEFAULT_RESOURCE_COUNT,
            max_processes: DEFAULT_MAX_PROCESSES,
            scan_order: ScanOrder::default(),
        }
    }
}

impl BankerConfig {
    /// Layer an optional TOML file and `BANKER_*` environment variables over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }
        let cfg: BankerConfig = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        log::debug!("loaded configuration: {cfg:?}");
        Ok(cfg)
    }

    /// Parse configuration from a TOML string, without environment overrides.
    pub fn from_toml(src: &str) -> Result<Self> {
        let cfg: BankerConfig =
            toml::from_str(src).map_err(|e| BankerError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| BankerError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.resource_count == 0 {
            return Err(BankerError::Config("resource_count must be at least 1".into()));
        }
        if self.max_processes == 0 {
            return Err(BankerError::Config("max_processes must be at least 1".into()));
        }
        Ok(())
    }
}
