// src/state.rs

use crate::config::AppConfig;
use crate::domain::{Dataset, DatasetStatus};
use crate::model::{ModelError, PriceModel};
use tracing::warn;

/// Everything a request handler reads. Built once before the server starts.
pub struct AppState {
    pub model: PriceModel,
    pub dataset: DatasetStatus,
}

impl AppState {
    /// Model artifacts are required; the dataset is optional.
    pub fn load(config: &AppConfig) -> Result<Self, ModelError> {
        let model = PriceModel::load(&config.columns_path, &config.model_path)?;

        let dataset: DatasetStatus = Dataset::load(&config.dataset_path).into();
        if let DatasetStatus::Unavailable(reason) = &dataset {
            warn!("Dashboard disabled: {reason}");
        }

        Ok(Self { model, dataset })
    }
}
