//! In-Memory Repository Implementation
//!
//! Thread-safe, in-memory implementation of `PredictionRepository`.
//!
//! # Limitations
//!
//! - Data is lost on application restart
//! - Limited by available RAM
//!
//! For durable storage use `SqlitePredictionRepository`.

use crate::domain::housing::FeatureRecord;
use crate::domain::repositories::{PredictionRepository, StoredPrediction};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct InMemoryPredictionRepository {
    rows: Arc<RwLock<Vec<StoredPrediction>>>,
}

impl InMemoryPredictionRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryPredictionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionRepository for InMemoryPredictionRepository {
    async fn save(&self, features: &FeatureRecord, prediction: f64) -> Result<i64> {
        let mut rows = self.rows.write().await;
        let id = rows.len() as i64 + 1;
        rows.push(StoredPrediction {
            id,
            features: features.clone(),
            prediction,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_recent(&self, limit: usize) -> Result<Vec<StoredPrediction>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().rev().take(limit).cloned().collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.rows.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_find_recent() {
        let repo = InMemoryPredictionRepository::new();
        let record = FeatureRecord::sample();

        assert_eq!(repo.save(&record, 100.0).await.unwrap(), 1);
        assert_eq!(repo.save(&record, 200.0).await.unwrap(), 2);
        assert_eq!(repo.save(&record, 300.0).await.unwrap(), 3);

        let recent = repo.find_recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].prediction, 300.0);
        assert_eq!(recent[1].prediction, 200.0);
        assert_eq!(repo.count().await.unwrap(), 3);
    }
}
