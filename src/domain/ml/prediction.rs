use serde::Serialize;

/// Which computation produced a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionSource {
    Model,
    Fallback,
}

/// Output of one prediction request, consumed immediately by the response
/// builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub predictions: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(skip)]
    pub source: PredictionSource,
}

impl PredictionResult {
    pub fn fallback(prediction: f64) -> Self {
        Self {
            predictions: vec![prediction],
            model_version: None,
            accuracy: None,
            source: PredictionSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == PredictionSource::Fallback
    }

    pub fn first(&self) -> Option<f64> {
        self.predictions.first().copied()
    }
}
