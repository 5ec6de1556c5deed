//! Model artifact configuration parsing from environment variables.

use super::parse_var;
use anyhow::{Result, ensure};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL_PATH: &str = "ml_model/model/best_pipeline.json";

/// Model environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEnvConfig {
    pub path: PathBuf,
    pub prediction_timeout_ms: u64,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
            prediction_timeout_ms: 5000,
        }
    }
}

impl ModelEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let prediction_timeout_ms =
            parse_var("PREDICTION_TIMEOUT_MS", defaults.prediction_timeout_ms)?;
        ensure!(
            prediction_timeout_ms > 0,
            "PREDICTION_TIMEOUT_MS must be greater than 0"
        );

        Ok(Self {
            path: env::var("MODEL_PATH").map(PathBuf::from).unwrap_or(defaults.path),
            prediction_timeout_ms,
        })
    }

    pub fn prediction_timeout(&self) -> Duration {
        Duration::from_millis(self.prediction_timeout_ms)
    }
}
