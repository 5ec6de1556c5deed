use crate::domain::housing::FeatureRecord;

/// Interface for trained price regression pipelines
pub trait PricePredictor: Send + Sync {
    /// Predict one price per record, in input order
    fn predict(&self, records: &[FeatureRecord]) -> Result<Vec<f64>, String>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;

    /// Held-out score recorded at training time, if any
    fn accuracy(&self) -> Option<f64> {
        None
    }
}
