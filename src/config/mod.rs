//! Configuration module for the price prediction service.
//!
//! This module provides structured configuration loading from environment
//! variables, organized by concern: Server, Model, Persistence and Auth.

mod auth_config;
mod model_config;
mod persistence_config;
mod server_config;

pub use auth_config::AuthEnvConfig;
pub use model_config::{DEFAULT_MODEL_PATH, ModelEnvConfig};
pub use persistence_config::PersistenceEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub model: ModelEnvConfig,
    pub persistence: PersistenceEnvConfig,
    pub auth: AuthEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerEnvConfig::from_env().context("Failed to load server config")?,
            model: ModelEnvConfig::from_env().context("Failed to load model config")?,
            persistence: PersistenceEnvConfig::from_env()
                .context("Failed to load persistence config")?,
            auth: AuthEnvConfig::from_env().context("Failed to load auth config")?,
        })
    }
}

/// Reads `key` and parses it, falling back to `default` when unset.
fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {}={:?}", key, raw)),
        Err(_) => Ok(default),
    }
}
