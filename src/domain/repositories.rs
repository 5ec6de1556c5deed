//! Repository Pattern Abstractions
//!
//! Submitted features and the price returned for them are handed to a
//! [`PredictionRepository`] once a request succeeds. The request path treats
//! it as a sink: nothing is ever read back while serving predictions.
//!
//! # Implementations
//!
//! - `SqlitePredictionRepository`: the `features` table in SQLite
//! - `InMemoryPredictionRepository`: `Arc<RwLock<Vec<_>>>`, for tests and
//!   runs without a database

use crate::domain::housing::FeatureRecord;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted request together with its prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredPrediction {
    pub id: i64,
    pub features: FeatureRecord,
    pub prediction: f64,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait PredictionRepository: Send + Sync {
    /// Store a record and its prediction, returning the new row id
    async fn save(&self, features: &FeatureRecord, prediction: f64) -> Result<i64>;

    /// Most recent rows, newest first
    async fn find_recent(&self, limit: usize) -> Result<Vec<StoredPrediction>>;

    async fn count(&self) -> Result<usize>;
}
