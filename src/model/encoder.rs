// src/model/encoder.rs

use super::schema::{ColumnSchema, FIXED_COLUMNS};

/// Model input: `[sqft, bath, bhk, <one-hot location>...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The location position set to 1, if any.
    pub fn location_index(&self) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .skip(FIXED_COLUMNS.len())
            .find(|(_, v)| **v == 1.0)
            .map(|(idx, _)| idx)
    }
}

/// Build the feature vector for one prediction.
///
/// Unknown locations are not an error: the vector simply carries no
/// location indicator and the prediction falls back to the continuous
/// features alone.
pub fn encode(
    schema: &ColumnSchema,
    location: &str,
    sqft: f64,
    bath: f64,
    bhk: f64,
) -> FeatureVector {
    let mut x = vec![0.0; schema.len()];
    x[0] = sqft;
    x[1] = bath;
    x[2] = bhk;

    if let Some(idx) = schema.location_index(location) {
        x[idx] = 1.0;
    }

    FeatureVector(x)
}
