use crate::config::{Config, DEFAULT_MODEL_PATH};
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const KEYS: &[&str] = &[
    "SERVER_HOST",
    "SERVER_PORT",
    "MODEL_PATH",
    "PREDICTION_TIMEOUT_MS",
    "PERSISTENCE_ENABLED",
    "DATABASE_URL",
    "AUTH_ENABLED",
    "JWT_SECRET_KEY",
    "JWT_ALGORITHM",
    "JWT_HEADER_NAME",
    "JWT_HEADER_TYPE",
];

fn clear_env() {
    for key in KEYS {
        // SAFETY: tests touching the environment hold ENV_LOCK.
        unsafe { env::remove_var(key) };
    }
}

fn set(key: &str, value: &str) {
    // SAFETY: tests touching the environment hold ENV_LOCK.
    unsafe { env::set_var(key, value) };
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.server.bind_address(), "127.0.0.1:5000");
    assert_eq!(config.model.path, PathBuf::from(DEFAULT_MODEL_PATH));
    assert_eq!(config.model.prediction_timeout_ms, 5000);
    assert!(config.persistence.enabled);
    assert!(!config.auth.enabled);
    assert_eq!(config.auth.header_name, "Authorization");
    assert_eq!(config.auth.header_type, "Bearer");
}

#[test]
fn test_config_from_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    set("SERVER_HOST", "0.0.0.0");
    set("SERVER_PORT", "8080");
    set("MODEL_PATH", "/srv/models/pipeline.json");
    set("PREDICTION_TIMEOUT_MS", "250");
    set("PERSISTENCE_ENABLED", "false");
    set("AUTH_ENABLED", "true");
    set("JWT_SECRET_KEY", "s3cret");

    let config = Config::from_env().unwrap();

    assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.model.path, PathBuf::from("/srv/models/pipeline.json"));
    assert_eq!(config.model.prediction_timeout().as_millis(), 250);
    assert!(!config.persistence.enabled);
    assert!(config.auth.enabled);
    assert_eq!(config.auth.secret_key.as_deref(), Some("s3cret"));

    clear_env();
}

#[test]
fn test_invalid_values_are_rejected() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    set("SERVER_PORT", "eighty");
    let err = Config::from_env().unwrap_err();
    assert!(format!("{:#}", err).contains("SERVER_PORT"));

    clear_env();
    set("PREDICTION_TIMEOUT_MS", "0");
    assert!(Config::from_env().is_err());

    clear_env();
    set("AUTH_ENABLED", "true");
    assert!(Config::from_env().is_err());

    clear_env();
}
