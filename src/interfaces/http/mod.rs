//! Axum-based HTTP interface.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod router;

pub use auth::AuthGuard;
pub use error::ApiError;
pub use handlers::HealthResponse;
pub use router::build_router;

use crate::application::prediction_service::PredictionService;
use std::sync::Arc;

/// Shared state injected into every handler via the `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

impl AppState {
    pub fn new(service: PredictionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
