mod common;

use common::*;
use homevalue::application::bootstrap::ServicesBootstrap;
use homevalue::config::Config;
use reqwest::StatusCode;
use serde_json::Value;
use std::io::Write;

fn config_with_model(path: std::path::PathBuf) -> Config {
    let mut config = Config::default();
    config.model.path = path;
    config.persistence.enabled = false;
    config
}

#[tokio::test]
async fn test_served_forest_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best_pipeline.json");
    let file = std::fs::File::create(&path).unwrap();
    serde_json::to_writer(file, &fitted_artifact("rf-integration")).unwrap();

    let services = ServicesBootstrap::init(&config_with_model(path)).await.unwrap();
    assert!(services.prediction_service.model_loaded());
    let base = spawn_app(services.prediction_service, None).await;

    let first: Value = post_json(&base, "/api/predict", valid_json().to_string())
        .await
        .json()
        .await
        .unwrap();
    let second: Value = post_json(&base, "/api/predict", valid_json().to_string())
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first["model_version"], "rf-integration");
    assert_eq!(first["accuracy"], 0.68);
    let price = first["predictions"][0].as_f64().unwrap();
    assert!(price.is_finite() && price > 0.0);
}

#[tokio::test]
async fn test_json_and_form_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best_pipeline.json");
    let file = std::fs::File::create(&path).unwrap();
    serde_json::to_writer(file, &fitted_artifact("rf-agree")).unwrap();

    let services = ServicesBootstrap::init(&config_with_model(path)).await.unwrap();
    let base = spawn_app(services.prediction_service, None).await;

    let json_response = post_json(&base, "/api/predict", valid_json().to_string()).await;
    assert_eq!(json_response.status(), StatusCode::OK);
    let form_response = post_form(&base, valid_form()).await;
    assert_eq!(form_response.status(), StatusCode::OK);

    let from_json: Value = json_response.json().await.unwrap();
    let from_form: Value = form_response.json().await.unwrap();
    assert_eq!(from_json["predictions"], from_form["predictions"]);
}

#[tokio::test]
async fn test_missing_artifact_serves_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let services = ServicesBootstrap::init(&config_with_model(dir.path().join("absent.json")))
        .await
        .unwrap();
    assert!(!services.prediction_service.model_loaded());

    let base = spawn_app(services.prediction_service, None).await;
    let body: Value = post_json(&base, "/api/predict", valid_json().to_string())
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["predictions"][0], 12800.0);
    assert!(body.get("model_version").is_none());
}

#[tokio::test]
async fn test_corrupt_artifact_fails_startup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"model_version\": \"rf\", \"feature_names\": [").unwrap();

    let result = ServicesBootstrap::init(&config_with_model(file.path().to_path_buf())).await;
    assert!(result.is_err());
}
