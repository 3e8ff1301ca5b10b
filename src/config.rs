// src/config.rs

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid value for {key}: '{value}'")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

/// Runtime settings, read from `HOMEPRICE_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub columns_path: PathBuf,
    pub model_path: PathBuf,
    pub dataset_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            columns_path: PathBuf::from("artifacts/columns.json"),
            model_path: PathBuf::from("artifacts/home_prices_model.json"),
            dataset_path: PathBuf::from("artifacts/bengaluru_house_data.csv"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("HOMEPRICE_ADDR") {
            config.addr = parse("HOMEPRICE_ADDR", v)?;
        }
        if let Some(v) = lookup("HOMEPRICE_MAX_WORKERS") {
            config.max_workers = parse("HOMEPRICE_MAX_WORKERS", v)?;
            if config.max_workers == 0 {
                return Err(ConfigError {
                    key: "HOMEPRICE_MAX_WORKERS",
                    value: "0".into(),
                });
            }
        }
        if let Some(v) = lookup("HOMEPRICE_COLUMNS_PATH") {
            config.columns_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("HOMEPRICE_MODEL_PATH") {
            config.model_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("HOMEPRICE_DATASET_PATH") {
            config.dataset_path = PathBuf::from(v);
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError { key, value })
}
