use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::lifecycle::GrowthThresholds;

/// Main configuration structure for greenhouse care
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GreenhouseConfig {
    /// Logging settings
    pub observability: ObservabilityConfig,
    /// Lifecycle transition thresholds
    pub lifecycle: LifecycleConfig,
    /// Task scheduler behaviour
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Seedlings advance when health is strictly above this
    pub seedling_to_growing: i32,
    /// Growing plants mature when health is strictly above this
    pub growing_to_mature: i32,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        let thresholds = GrowthThresholds::default();
        Self {
            seedling_to_growing: thresholds.seedling_to_growing,
            growing_to_mature: thresholds.growing_to_mature,
        }
    }
}

impl LifecycleConfig {
    pub fn thresholds(&self) -> GrowthThresholds {
        GrowthThresholds {
            seedling_to_growing: self.seedling_to_growing,
            growing_to_mature: self.growing_to_mature,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Whether `clear` also empties the execution history
    pub clear_history_on_clear: bool,
}

impl GreenhouseConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (greenhouse-care.toml, .greenhouse-care-rc)
    /// 3. Environment variables (prefixed with GREENHOUSE_CARE_, sections split by __)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder();

        if Path::new("greenhouse-care.toml").exists() {
            builder = builder.add_source(File::with_name("greenhouse-care"));
        }

        if Path::new(".greenhouse-care-rc").exists() {
            builder = builder.add_source(
                File::with_name(".greenhouse-care-rc").format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("GREENHOUSE_CARE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load from an explicit TOML file, still honouring environment overrides
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()).format(config::FileFormat::Toml))
            .add_source(
                Environment::with_prefix("GREENHOUSE_CARE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
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
