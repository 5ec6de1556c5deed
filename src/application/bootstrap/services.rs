use anyhow::{Context, Result};
use tracing::info;

use crate::application::bootstrap::persistence::{PersistenceBootstrap, PersistenceHandle};
use crate::application::model_holder::ModelHandle;
use crate::application::prediction_service::PredictionService;
use crate::config::Config;

pub struct ServicesHandle {
    pub prediction_service: PredictionService,
    pub persistence: Option<PersistenceHandle>,
}

pub struct ServicesBootstrap;

impl ServicesBootstrap {
    pub async fn init(config: &Config) -> Result<ServicesHandle> {
        // 1. Load the model once; an absent artifact means fallback mode
        let model = ModelHandle::load(&config.model.path)
            .with_context(|| format!("Failed to load model artifact {:?}", config.model.path))?;
        if let Some(predictor) = model.predictor() {
            info!(
                "Model ready: {} (version {})",
                predictor.name(),
                predictor.version()
            );
        } else {
            info!("No model artifact, predictions will use the fallback estimator");
        }

        // 2. Optional persistence sink
        let persistence = PersistenceBootstrap::init(&config.persistence).await?;

        let mut prediction_service =
            PredictionService::new(model, config.model.prediction_timeout());
        if let Some(handle) = &persistence {
            prediction_service =
                prediction_service.with_repository(handle.prediction_repository.clone());
        }

        Ok(ServicesHandle {
            prediction_service,
            persistence,
        })
    }
}
