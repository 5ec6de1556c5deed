use super::AppState;
use super::auth::{AuthGuard, require_token};
use super::handlers;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the HTTP API router.
///
/// When `auth` is given, the prediction routes require a valid token;
/// `/health` never does.
pub fn build_router(state: AppState, auth: Option<AuthGuard>) -> Router {
    let mut prediction = Router::new()
        .route("/api/predict", post(handlers::predict_json))
        .route("/predict", post(handlers::predict_form));

    if let Some(guard) = auth {
        prediction =
            prediction.route_layer(middleware::from_fn_with_state(Arc::new(guard), require_token));
    }

    Router::new()
        .route("/health", get(handlers::health))
        .merge(prediction)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
