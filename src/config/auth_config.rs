//! Token authentication configuration parsing from environment variables.
//!
//! Authentication is off unless `AUTH_ENABLED=true`, in which case a
//! `JWT_SECRET_KEY` is mandatory.

use super::parse_var;
use anyhow::{Result, bail, ensure};
use std::env;

/// Auth environment configuration
#[derive(Clone, PartialEq, Eq)]
pub struct AuthEnvConfig {
    pub enabled: bool,
    pub secret_key: Option<String>,
    pub algorithm: String,
    pub header_name: String,
    pub header_type: String,
}

impl Default for AuthEnvConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            secret_key: None,
            algorithm: "HS256".to_string(),
            header_name: "Authorization".to_string(),
            header_type: "Bearer".to_string(),
        }
    }
}

impl AuthEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            enabled: parse_var("AUTH_ENABLED", defaults.enabled)?,
            secret_key: env::var("JWT_SECRET_KEY").ok().filter(|s| !s.is_empty()),
            algorithm: env::var("JWT_ALGORITHM").unwrap_or(defaults.algorithm),
            header_name: env::var("JWT_HEADER_NAME").unwrap_or(defaults.header_name),
            header_type: env::var("JWT_HEADER_TYPE").unwrap_or(defaults.header_type),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        ensure!(
            self.secret_key.is_some(),
            "JWT_SECRET_KEY is required when AUTH_ENABLED=true"
        );
        if !self.algorithm.eq_ignore_ascii_case("HS256") {
            bail!("Invalid JWT_ALGORITHM: {}. Only 'HS256' is supported", self.algorithm);
        }
        ensure!(
            axum::http::HeaderName::from_bytes(self.header_name.as_bytes()).is_ok(),
            "Invalid JWT_HEADER_NAME: {}",
            self.header_name
        );
        Ok(())
    }
}

// Keeps the secret out of logs.
impl std::fmt::Debug for AuthEnvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthEnvConfig")
            .field("enabled", &self.enabled)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "***"))
            .field("algorithm", &self.algorithm)
            .field("header_name", &self.header_name)
            .field("header_type", &self.header_type)
            .finish()
    }
}
