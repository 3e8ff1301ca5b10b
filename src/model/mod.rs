// src/model/mod.rs

pub mod encoder;
pub mod predictor;
pub mod schema;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

pub use encoder::{encode, FeatureVector};
pub use predictor::{LinearModel, Predictor};
pub use schema::ColumnSchema;

/// Errors raised while loading the model artifacts or running inference.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid column schema: {0}")]
    InvalidSchema(String),

    #[error("model expects {expected} features but got {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// A rounded price estimate, in Lakhs.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub price_lakhs: f64,
    /// False when the location was not part of the schema and contributed no signal.
    pub location_matched: bool,
}

/// The column schema and predictor, loaded once at startup and only read afterwards.
pub struct PriceModel {
    schema: ColumnSchema,
    predictor: Box<dyn Predictor>,
}

impl PriceModel {
    pub fn new(schema: ColumnSchema, predictor: Box<dyn Predictor>) -> Result<Self, ModelError> {
        if predictor.width() != schema.len() {
            return Err(ModelError::DimensionMismatch {
                expected: predictor.width(),
                found: schema.len(),
            });
        }

        Ok(Self { schema, predictor })
    }

    /// Load `columns.json` and the linear model artifact from disk.
    pub fn load(columns_path: &Path, model_path: &Path) -> Result<Self, ModelError> {
        let schema = ColumnSchema::load(columns_path)?;
        let model = LinearModel::load(model_path)?;

        info!(
            columns = schema.len(),
            locations = schema.locations().len(),
            "Loaded price model from {}",
            model_path.display()
        );

        Self::new(schema, Box::new(model))
    }

    /// Location names sorted for display.
    pub fn locations(&self) -> Vec<&str> {
        self.schema.sorted_locations()
    }

    pub fn estimate(
        &self,
        location: &str,
        sqft: f64,
        bath: f64,
        bhk: f64,
    ) -> Result<Estimate, ModelError> {
        let features = encode(&self.schema, location, sqft, bath, bhk);
        let column = features
            .location_index()
            .and_then(|idx| self.schema.location_at(idx));
        let raw = self.predictor.predict(&features)?;

        debug!(location, ?column, sqft, bath, bhk, raw, "price estimate");

        Ok(Estimate {
            price_lakhs: round2(raw),
            location_matched: column.is_some(),
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ModelError::Json {
        path: path.display().to_string(),
        source,
    })
}
