use super::predictor::PricePredictor;
use crate::domain::housing::{FEATURE_NAMES, FeatureRecord};
use crate::domain::ml::feature_registry::records_to_rows;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

pub type ForestRegressor = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Per-column standardization fitted alongside the regressor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    fn transform(&self, row: &mut [f64]) {
        for ((value, mean), scale) in row.iter_mut().zip(&self.mean).zip(&self.scale) {
            // Constant columns are stored with scale 0; they only get centered.
            let divisor = if *scale == 0.0 { 1.0 } else { *scale };
            *value = (*value - mean) / divisor;
        }
    }
}

/// On-disk pipeline: preprocessing, regressor and training metadata.
#[derive(Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub model_version: String,
    #[serde(default)]
    pub accuracy: Option<f64>,
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    pub regressor: ForestRegressor,
}

pub struct SmartCorePredictor {
    artifact: PipelineArtifact,
}

impl SmartCorePredictor {
    pub fn from_artifact(artifact: PipelineArtifact) -> Result<Self> {
        if artifact.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES.iter().copied()) {
            bail!(
                "Model artifact features {:?} do not match schema {:?}",
                artifact.feature_names,
                FEATURE_NAMES
            );
        }
        if let Some(scaler) = &artifact.scaler
            && (scaler.mean.len() != FEATURE_NAMES.len()
                || scaler.scale.len() != FEATURE_NAMES.len())
        {
            bail!(
                "Scaler has {}/{} columns, expected {}",
                scaler.mean.len(),
                scaler.scale.len(),
                FEATURE_NAMES.len()
            );
        }
        Ok(Self { artifact })
    }

    /// Loads the artifact at `path`. A missing file is not an error: the
    /// caller decides how to serve without a model.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            warn!(
                "ML Model file not found at {:?}. Serving fallback estimates.",
                path
            );
            return Ok(None);
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open model file {:?}", path))?;
        let artifact: PipelineArtifact = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to deserialize model artifact {:?}", path))?;
        let predictor = Self::from_artifact(artifact)?;

        info!(
            "Successfully loaded ML model {} from {:?}",
            predictor.artifact.model_version, path
        );
        Ok(Some(predictor))
    }
}

impl PricePredictor for SmartCorePredictor {
    fn predict(&self, records: &[FeatureRecord]) -> Result<Vec<f64>, String> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let mut rows = records_to_rows(records);
        if let Some(scaler) = &self.artifact.scaler {
            rows.iter_mut().for_each(|row| scaler.transform(row));
        }

        let input_matrix = DenseMatrix::from_2d_vec(&rows)
            .map_err(|e| format!("Matrix creation failed: {}", e))?;

        self.artifact
            .regressor
            .predict(&input_matrix)
            .map_err(|e| format!("Regressor failed: {}", e))
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        &self.artifact.model_version
    }

    fn accuracy(&self) -> Option<f64> {
        self.artifact.accuracy
    }
}
