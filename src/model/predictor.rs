// src/model/predictor.rs

use super::{read_json, FeatureVector, ModelError};
use serde::Deserialize;
use std::path::Path;

/// Anything that turns one feature vector into one price.
pub trait Predictor: Send + Sync {
    /// Number of features the predictor was trained on.
    fn width(&self) -> usize;

    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}

/// Ordinary least-squares model exported as `{ "intercept": .., "coefficients": [..] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        read_json(path)
    }
}

impl Predictor for LinearModel {
    fn width(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.coefficients.len(),
                found: features.len(),
            });
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features.as_slice())
            .map(|(c, x)| c * x)
            .sum();

        Ok(self.intercept + dot)
    }
}
