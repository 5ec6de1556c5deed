use super::coercion::{RawInput, coerce};
use super::ml::{PredictionAdapter, fallback};
use super::model_holder::ModelHandle;
use crate::domain::errors::PredictError;
use crate::domain::housing::FeatureRecord;
use crate::domain::ml::PredictionResult;
use crate::domain::repositories::PredictionRepository;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Coercion, then model or fallback inference, then the persistence sink.
///
/// Stateless across requests; the model handle and repository are shared.
pub struct PredictionService {
    model: ModelHandle,
    adapter: Option<PredictionAdapter>,
    repository: Option<Arc<dyn PredictionRepository>>,
}

impl PredictionService {
    pub fn new(model: ModelHandle, inference_timeout: Duration) -> Self {
        let adapter = model
            .predictor()
            .map(|predictor| PredictionAdapter::new(Arc::clone(predictor), inference_timeout));
        Self {
            model,
            adapter,
            repository: None,
        }
    }

    pub fn with_repository(mut self, repository: Arc<dyn PredictionRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_loaded()
    }

    pub async fn predict(&self, input: &RawInput) -> Result<PredictionResult, PredictError> {
        let record = coerce(input).inspect_err(|e| debug!("Rejected input: {}", e))?;

        let result = match &self.adapter {
            None => {
                debug!("No model loaded, using fallback estimator");
                PredictionResult::fallback(fallback::estimate(&record))
            }
            Some(adapter) => adapter
                .predict(vec![record.clone()])
                .await
                .inspect_err(|e| {
                    error!(
                        error = ?e,
                        features = ?record,
                        "Prediction failed: {}",
                        e
                    )
                })?,
        };

        self.persist(&record, &result).await;
        Ok(result)
    }

    async fn persist(&self, record: &FeatureRecord, result: &PredictionResult) {
        let (Some(repository), Some(prediction)) = (&self.repository, result.first()) else {
            return;
        };
        match repository.save(record, prediction).await {
            Ok(id) => info!(
                fallback = result.is_fallback(),
                "Persisted prediction {} ({:.2})",
                id,
                prediction
            ),
            Err(e) => warn!("Failed to persist prediction: {:#}", e),
        }
    }
}
