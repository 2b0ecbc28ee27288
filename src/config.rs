use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the workshop console
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkshopConsoleConfig {
    /// Catalog bootstrap settings
    pub catalog: CatalogConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Optional JSON file replacing the built-in example seed
    pub seed_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level filter (e.g. "info", "workshop_console=debug")
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        ObservabilityConfig {
            log_level: "info".to_string(),
        }
    }
}

impl WorkshopConsoleConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. Configuration file (workshop-console.toml)
    /// 3. Environment variables (prefixed with WORKSHOP_CONSOLE_)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder();

        if Path::new("workshop-console.toml").exists() {
            builder = builder.add_source(File::with_name("workshop-console"));
        }

        builder = builder.add_source(
            Environment::with_prefix("WORKSHOP_CONSOLE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let loaded: WorkshopConsoleConfig = config.try_deserialize()?;
        Ok(loaded)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorkshopConsoleConfig::default();
        assert!(config.catalog.seed_file.is_none());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: WorkshopConsoleConfig = serde_json::from_str("{}").unwrap();
        assert!(config.catalog.seed_file.is_none());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_config_round_trips_through_serde() {
        let config = WorkshopConsoleConfig {
            catalog: CatalogConfig {
                seed_file: Some("seed.json".to_string()),
            },
            observability: ObservabilityConfig {
                log_level: "debug".to_string(),
            },
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: WorkshopConsoleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.catalog.seed_file.as_deref(), Some("seed.json"));
        assert_eq!(back.observability.log_level, "debug");
    }
}
