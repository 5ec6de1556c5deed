use super::predictor::PricePredictor;
use crate::domain::errors::PredictionError;
use crate::domain::housing::FeatureRecord;
use crate::domain::ml::{PredictionResult, PredictionSource};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Runs a loaded pipeline for one request.
///
/// Inference happens on the blocking pool under a deadline. Whatever goes
/// wrong inside the pipeline (error, panic, timeout, malformed output) comes
/// back as a [`PredictionError`]; the held model is only ever read.
#[derive(Clone)]
pub struct PredictionAdapter {
    predictor: Arc<dyn PricePredictor>,
    timeout: Duration,
}

impl PredictionAdapter {
    pub fn new(predictor: Arc<dyn PricePredictor>, timeout: Duration) -> Self {
        Self { predictor, timeout }
    }

    pub async fn predict(
        &self,
        records: Vec<FeatureRecord>,
    ) -> Result<PredictionResult, PredictionError> {
        let expected = records.len();
        let predictor = Arc::clone(&self.predictor);
        let task = tokio::task::spawn_blocking(move || predictor.predict(&records));

        let predictions = match timeout(self.timeout, task).await {
            Err(_) => {
                return Err(PredictionError::Timeout {
                    timeout_ms: self.timeout.as_millis() as u64,
                });
            }
            Ok(Err(join_error)) if join_error.is_panic() => {
                return Err(PredictionError::inference("pipeline panicked during inference"));
            }
            Ok(Err(join_error)) => {
                return Err(PredictionError::inference(join_error.to_string()));
            }
            Ok(Ok(outcome)) => outcome.map_err(PredictionError::inference)?,
        };

        if predictions.len() != expected {
            return Err(PredictionError::inference(format!(
                "pipeline returned {} predictions for {} rows",
                predictions.len(),
                expected
            )));
        }
        if predictions.iter().any(|p| !p.is_finite()) {
            return Err(PredictionError::inference(
                "pipeline returned a non-finite prediction",
            ));
        }

        Ok(PredictionResult {
            predictions,
            model_version: Some(self.predictor.version().to_string()),
            accuracy: self.predictor.accuracy(),
            source: PredictionSource::Model,
        })
    }
}
