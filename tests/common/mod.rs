#![allow(dead_code)]

use homevalue::application::ml::PricePredictor;
use homevalue::application::ml::smartcore_predictor::PipelineArtifact;
use homevalue::application::model_holder::ModelHandle;
use homevalue::application::prediction_service::PredictionService;
use homevalue::domain::housing::{FEATURE_NAMES, FeatureRecord, FurnishingStatus};
use homevalue::domain::ml::feature_registry::features_to_f64_vector;
use homevalue::interfaces::http::{AppState, AuthGuard, build_router};
use serde_json::{Value, json};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::sync::Arc;
use std::time::Duration;

pub const TIMEOUT: Duration = Duration::from_secs(5);

/// Serves the API on an ephemeral port and returns its base URL.
pub async fn spawn_app(service: PredictionService, auth: Option<AuthGuard>) -> String {
    let app = build_router(AppState::new(service), auth);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn fallback_service() -> PredictionService {
    PredictionService::new(ModelHandle::empty(), TIMEOUT)
}

pub fn model_service(predictor: impl PricePredictor + 'static) -> PredictionService {
    PredictionService::new(ModelHandle::loaded(Arc::new(predictor)), TIMEOUT)
}

/// Always answers `price`.
pub struct ConstantPredictor(pub f64);

impl PricePredictor for ConstantPredictor {
    fn predict(&self, records: &[FeatureRecord]) -> Result<Vec<f64>, String> {
        Ok(vec![self.0; records.len()])
    }

    fn name(&self) -> &str {
        "constant"
    }

    fn version(&self) -> &str {
        "constant-1"
    }

    fn accuracy(&self) -> Option<f64> {
        Some(0.75)
    }
}

pub struct BrokenPredictor;

impl PricePredictor for BrokenPredictor {
    fn predict(&self, _records: &[FeatureRecord]) -> Result<Vec<f64>, String> {
        Err("regressor state corrupted".to_string())
    }

    fn name(&self) -> &str {
        "broken"
    }

    fn version(&self) -> &str {
        "broken-1"
    }
}

/// Complete JSON body: 1000 sq ft, 3 bed, 1 bath, 2 stories.
pub fn valid_json() -> Value {
    json!({
        "area": 1000,
        "bedrooms": 3,
        "bathrooms": 1,
        "stories": 2,
        "mainroad": true,
        "guestroom": false,
        "basement": false,
        "hotwaterheating": false,
        "airconditioning": true,
        "parking": 1,
        "prefarea": false,
        "furnishingstatus": "semi-furnished"
    })
}

/// Same house as [`valid_json`], URL-encoded.
pub fn valid_form() -> String {
    [
        "area=1000",
        "bedrooms=3",
        "bathrooms=1",
        "stories=2",
        "mainroad=yes",
        "guestroom=no",
        "basement=no",
        "hotwaterheating=no",
        "airconditioning=on",
        "parking=1",
        "prefarea=off",
        "furnishingstatus=semi-furnished",
    ]
    .join("&")
}

pub async fn post_json(base: &str, path: &str, body: String) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}{}", base, path))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap()
}

pub async fn post_form(base: &str, body: String) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/predict", base))
        .header("content-type", "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await
        .unwrap()
}

fn training_records() -> Vec<FeatureRecord> {
    (0..60u32)
        .map(|i| FeatureRecord {
            area: 1200.0 + f64::from(i) * 150.0,
            bedrooms: 1 + i % 5,
            bathrooms: 1 + i % 3,
            stories: 1 + i % 4,
            mainroad: i % 2 == 0,
            guestroom: i % 3 == 0,
            basement: i % 4 == 0,
            hotwaterheating: i % 9 == 0,
            airconditioning: i % 2 == 1,
            parking: i % 4,
            prefarea: i % 5 == 0,
            furnishingstatus: match i % 3 {
                0 => FurnishingStatus::Furnished,
                1 => FurnishingStatus::SemiFurnished,
                _ => FurnishingStatus::Unfurnished,
            },
        })
        .collect()
}

/// A small forest fitted on synthetic houses, ready to be written to disk.
pub fn fitted_artifact(model_version: &str) -> PipelineArtifact {
    let records = training_records();
    let x: Vec<Vec<f64>> = records.iter().map(features_to_f64_vector).collect();
    let y: Vec<f64> = records
        .iter()
        .map(|r| r.area * 600.0 + f64::from(r.bathrooms) * 120_000.0)
        .collect();

    let matrix = DenseMatrix::from_2d_vec(&x).unwrap();
    let params = RandomForestRegressorParameters::default()
        .with_n_trees(10)
        .with_max_depth(6);
    let regressor = RandomForestRegressor::fit(&matrix, &y, params).unwrap();

    PipelineArtifact {
        model_version: model_version.to_string(),
        accuracy: Some(0.68),
        feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        scaler: None,
        regressor,
    }
}
