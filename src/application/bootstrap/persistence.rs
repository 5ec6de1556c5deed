use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::config::PersistenceEnvConfig;
use crate::domain::repositories::PredictionRepository;
use crate::infrastructure::persistence::database::Database;
use crate::infrastructure::persistence::repositories::SqlitePredictionRepository;

pub struct PersistenceHandle {
    pub db: Database,
    pub prediction_repository: Arc<dyn PredictionRepository>,
}

pub struct PersistenceBootstrap;

impl PersistenceBootstrap {
    /// Opens the database, or returns `None` when persistence is disabled.
    pub async fn init(config: &PersistenceEnvConfig) -> Result<Option<PersistenceHandle>> {
        if !config.enabled {
            info!("Persistence disabled, predictions will not be stored");
            return Ok(None);
        }

        info!("Initializing Database at {}", config.database_url);
        let db = Database::new(&config.database_url)
            .await
            .context("Failed to initialize database")?;

        let prediction_repository = Arc::new(SqlitePredictionRepository::new(db.pool.clone()));

        Ok(Some(PersistenceHandle {
            db,
            prediction_repository,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::housing::FeatureRecord;

    #[tokio::test]
    async fn test_disabled_persistence_opens_nothing() {
        let config = PersistenceEnvConfig {
            enabled: false,
            database_url: "sqlite:///nonexistent/dir/never.db".to_string(),
        };
        assert!(PersistenceBootstrap::init(&config).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_enabled_persistence_provides_repository() {
        let dir = tempfile::tempdir().unwrap();
        let config = PersistenceEnvConfig {
            enabled: true,
            database_url: format!("sqlite://{}", dir.path().join("homevalue.db").display()),
        };

        let handle = PersistenceBootstrap::init(&config).await.unwrap().unwrap();
        handle
            .prediction_repository
            .save(&FeatureRecord::sample(), 12800.0)
            .await
            .unwrap();
        assert_eq!(handle.prediction_repository.count().await.unwrap(), 1);
    }
}
