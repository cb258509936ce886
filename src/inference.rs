//! Loading and evaluation of the trained regression artifact.

use std::path::Path;

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Feature names in the order the regression was trained on. The form field
/// names and the input vector layout both follow this order.
pub const FEATURE_NAMES: [&str; 6] = [
    "carlength",
    "carwidth",
    "carheight",
    "enginesize",
    "horsepower",
    "peakrpm",
];

/// On-disk schema of the artifact written by the training pipeline.
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    coefficients: Vec<f64>,
    intercept: f64,
}

/// A pre-trained linear regression, immutable after load.
#[derive(Debug, Clone)]
pub struct LinearModel {
    weights: Array1<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Builds a model directly from its parameters. Used by tests and by
    /// anything embedding the predictor without an artifact on disk.
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self {
            weights: Array1::from(weights),
            intercept,
        }
    }

    /// Loads the regression artifact exported by the training pipeline.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let artifact: ModelArtifact =
            serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        if artifact.coefficients.is_empty() {
            return Err(ModelError::Empty);
        }

        Ok(Self {
            weights: Array1::from(artifact.coefficients),
            intercept: artifact.intercept,
        })
    }

    /// Number of features the regression expects.
    pub fn input_dim(&self) -> usize {
        self.weights.len()
    }

    /// Evaluates the regression for one feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.weights.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.weights.len(),
                got: features.len(),
            });
        }

        Ok(self.weights.dot(&ArrayView1::from(features)) + self.intercept)
    }

    pub fn get_model_info(&self) -> ModelInfo {
        ModelInfo {
            input_dim: self.input_dim(),
            features: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub input_dim: usize,
    pub features: Vec<String>,
}
