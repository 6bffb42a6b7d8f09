use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::storage::memory::DEFAULT_ACCESS_LINK_BASE;

/// Main configuration structure for the yearbook tracker.
///
/// Loaded explicitly and handed to whatever needs it - there is no global
/// instance, so embedding applications stay in control of lifecycle.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackerConfig {
    /// Workflow limits and link generation
    pub workflow: WorkflowConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowConfig {
    /// Upper bound on images attached to one page
    pub max_images_per_page: usize,
    /// Base URL participant access links are minted under
    pub access_link_base: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Enable structured tracing output
    pub tracing_enabled: bool,
    /// Log level
    pub log_level: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_images_per_page: 10,
            access_link_base: DEFAULT_ACCESS_LINK_BASE.to_string(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            tracing_enabled: true,
            log_level: "info".to_string(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            workflow: WorkflowConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (yearbook-tracker.toml)
    /// 3. Environment variables (prefixed with YEARBOOK_)
    pub fn load() -> Result<Self> {
        let defaults = TrackerConfig::default();
        let mut builder = Config::builder()
            .set_default("workflow.max_images_per_page", defaults.workflow.max_images_per_page as i64)?
            .set_default("workflow.access_link_base", defaults.workflow.access_link_base)?
            .set_default("observability.tracing_enabled", defaults.observability.tracing_enabled)?
            .set_default("observability.log_level", defaults.observability.log_level)?;

        if Path::new("yearbook-tracker.toml").exists() {
            builder = builder.add_source(File::with_name("yearbook-tracker"));
        }

        builder = builder.add_source(
            Environment::with_prefix("YEARBOOK")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}
