use crate::domain::housing::{FeatureRecord, FurnishingStatus};
use crate::domain::repositories::{PredictionRepository, StoredPrediction};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::debug;

pub struct SqlitePredictionRepository {
    pool: SqlitePool,
}

impl SqlitePredictionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn map_row(row: &SqliteRow) -> Result<StoredPrediction> {
        let furnishing: String = row.try_get("furnishingstatus")?;
        let created_at: i64 = row.try_get("created_at")?;

        Ok(StoredPrediction {
            id: row.try_get("id")?,
            features: FeatureRecord {
                area: row.try_get("area")?,
                bedrooms: row.try_get::<i64, _>("bedrooms")? as u32,
                bathrooms: row.try_get::<i64, _>("bathrooms")? as u32,
                stories: row.try_get::<i64, _>("stories")? as u32,
                mainroad: row.try_get("mainroad")?,
                guestroom: row.try_get("guestroom")?,
                basement: row.try_get("basement")?,
                hotwaterheating: row.try_get("hotwaterheating")?,
                airconditioning: row.try_get("airconditioning")?,
                parking: row.try_get::<i64, _>("parking")? as u32,
                prefarea: row.try_get("prefarea")?,
                furnishingstatus: FurnishingStatus::from_str(&furnishing).map_err(|e| anyhow!(e))?,
            },
            prediction: row.try_get("prediction")?,
            created_at: DateTime::<Utc>::from_timestamp(created_at, 0).unwrap_or_default(),
        })
    }
}

#[async_trait]
impl PredictionRepository for SqlitePredictionRepository {
    async fn save(&self, features: &FeatureRecord, prediction: f64) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO features (
                area, bedrooms, bathrooms, stories, mainroad, guestroom, basement,
                hotwaterheating, airconditioning, parking, prefarea, furnishingstatus,
                prediction
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(features.area)
        .bind(i64::from(features.bedrooms))
        .bind(i64::from(features.bathrooms))
        .bind(i64::from(features.stories))
        .bind(features.mainroad)
        .bind(features.guestroom)
        .bind(features.basement)
        .bind(features.hotwaterheating)
        .bind(features.airconditioning)
        .bind(i64::from(features.parking))
        .bind(features.prefarea)
        .bind(features.furnishingstatus.as_str())
        .bind(prediction)
        .execute(&self.pool)
        .await
        .context("Failed to save features")?;

        let id = result.last_insert_rowid();
        debug!("Persisted features row {}", id);
        Ok(id)
    }

    async fn find_recent(&self, limit: usize) -> Result<Vec<StoredPrediction>> {
        let rows = sqlx::query("SELECT * FROM features ORDER BY id DESC LIMIT ?")
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .context("Failed to load recent features")?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn count(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM features")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count features")?;
        Ok(count as usize)
    }
}
