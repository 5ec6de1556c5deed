use super::parse_var;
use anyhow::Result;
use std::env;

/// Persistence environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceEnvConfig {
    pub enabled: bool,
    pub database_url: String,
}

impl Default for PersistenceEnvConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            database_url: "sqlite://data/homevalue.db".to_string(),
        }
    }
}

impl PersistenceEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            enabled: parse_var("PERSISTENCE_ENABLED", defaults.enabled)?,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
        })
    }
}
