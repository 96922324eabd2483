//! Layered application configuration.
//!
//! defaults -> YAML file (if provided) -> env (`TENANT_BRANDING__*`) -> CLI overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use static_directory_plugin::StaticDirectoryConfig;
use tenant_branding::TenantBrandingConfig;

pub const ENV_PREFIX: &str = "TENANT_BRANDING__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub branding: TenantBrandingConfig,
    pub directory: StaticDirectoryConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// Durable snapshot store location. `None` keeps state in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when neither `RUST_LOG` nor `-v` is given.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads the layered configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, any layer fails to
    /// parse, or the branding section fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment
            .extract()
            .context("failed to load tenant branding configuration")?;
        config
            .branding
            .validate()
            .context("invalid branding configuration")?;
        Ok(config)
    }

    /// Pretty JSON rendering of the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}
