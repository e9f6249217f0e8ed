use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    /// Serve the OpenAPI document at `/openapi.json`.
    pub docs_enabled: bool,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            service_name: "item-service".to_string(),
            docs_enabled: true,
        }
    }
}

impl ItemConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = core_config::Config::load()?;

        Ok(ItemConfig {
            common,
            service_name: get_env("SERVICE_NAME", "item-service"),
            docs_enabled: parse_flag("DOCS_ENABLED", &get_env("DOCS_ENABLED", "true"))?,
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(key: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} must be a boolean, got '{}'",
            key,
            other
        ))),
    }
}
