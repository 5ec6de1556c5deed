//! Request handlers
//!
//! GET  /health       - liveness; reports whether a model is loaded
//! POST /api/predict  - JSON body with the 12 feature fields
//! POST /predict      - URL-encoded form with the same fields

use super::AppState;
use super::error::ApiError;
use crate::application::coercion::RawInput;
use crate::domain::errors::{ParseError, PredictError};
use crate::domain::ml::PredictionResult;
use axum::{
    Json,
    body::Bytes,
    extract::{Form, State, rejection::FormRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{Instrument, debug, info_span};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

/// Always 200, whatever the model state.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model_loaded: state.service.model_loaded(),
    })
}

/// The body is read raw so that any content type is accepted and decode
/// failures map to our own error shape.
pub async fn predict_json(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictionResult>, ApiError> {
    let input = RawInput::from_json_slice(&body).map_err(PredictError::from)?;
    respond(&state, input).await
}

pub async fn predict_form(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Form(pairs) = form.map_err(|rejection| {
        debug!("Rejected form body: {}", rejection);
        PredictError::from(ParseError::InvalidForm)
    })?;
    respond(&state, RawInput::from_form(pairs)).await
}

async fn respond(state: &AppState, input: RawInput) -> Result<Json<PredictionResult>, ApiError> {
    let span = info_span!("predict", request_id = %Uuid::new_v4(), mode = ?input.mode());
    let result = state.service.predict(&input).instrument(span).await?;
    Ok(Json(result))
}
