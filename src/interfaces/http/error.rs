//! HTTP error mapping

use crate::domain::errors::PredictError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors that end an HTTP request
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Predict(#[from] PredictError),

    #[error("{0}")]
    Unauthorized(String),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Predict(PredictError::Parse(_) | PredictError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Predict(PredictError::Prediction(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Unauthorized(message) => json!({ "error": { "message": message } }),
            ApiError::Predict(error) => json!({ "error": error.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
