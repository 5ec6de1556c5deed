//! Process-wide holder for the loaded price pipeline.
//!
//! Filled once during startup and shared read-only by every request
//! afterwards. An empty handle is a valid state: requests are then answered
//! by the fallback estimator. There is no reload; a new artifact needs a new
//! deployment.

use super::ml::{PricePredictor, SmartCorePredictor};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct ModelHandle {
    predictor: Option<Arc<dyn PricePredictor>>,
}

impl ModelHandle {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn loaded(predictor: Arc<dyn PricePredictor>) -> Self {
        Self {
            predictor: Some(predictor),
        }
    }

    /// Loads the artifact at `path`. A missing file yields an empty handle;
    /// an unreadable or inconsistent artifact is an error.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(match SmartCorePredictor::load(path)? {
            Some(predictor) => Self::loaded(Arc::new(predictor)),
            None => Self::empty(),
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.predictor.is_some()
    }

    pub fn predictor(&self) -> Option<&Arc<dyn PricePredictor>> {
        self.predictor.as_ref()
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandle")
            .field("model", &self.predictor.as_ref().map(|p| p.version()))
            .finish()
    }
}
