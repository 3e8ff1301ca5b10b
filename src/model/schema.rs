// src/model/schema.rs

use super::{read_json, ModelError};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// The continuous features, in the order the model expects them.
pub const FIXED_COLUMNS: [&str; 3] = ["sqft", "bath", "bhk"];

/// Shape of `columns.json` as written by the training notebook.
#[derive(Debug, Deserialize)]
struct ColumnsFile {
    data_columns: Vec<String>,
}

/// Ordered feature names: `sqft`, `bath`, `bhk`, then one column per location.
#[derive(Debug, Clone)]
pub struct ColumnSchema {
    columns: Vec<String>,
    location_positions: HashMap<String, usize>,
}

impl ColumnSchema {
    pub fn new(columns: Vec<String>) -> Result<Self, ModelError> {
        if columns.len() < FIXED_COLUMNS.len()
            || columns.iter().zip(FIXED_COLUMNS).any(|(c, f)| c != f)
        {
            return Err(ModelError::InvalidSchema(format!(
                "schema must start with {FIXED_COLUMNS:?}"
            )));
        }

        let mut location_positions = HashMap::new();
        for (idx, name) in columns.iter().enumerate().skip(FIXED_COLUMNS.len()) {
            if FIXED_COLUMNS.contains(&name.as_str())
                || location_positions.insert(name.clone(), idx).is_some()
            {
                return Err(ModelError::InvalidSchema(format!(
                    "duplicate column '{name}'"
                )));
            }
            if *name != name.to_lowercase() {
                return Err(ModelError::InvalidSchema(format!(
                    "location column '{name}' is not lowercase"
                )));
            }
        }

        Ok(Self {
            columns,
            location_positions,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let file: ColumnsFile = read_json(path)?;
        Self::new(file.data_columns)
    }

    /// Total feature count, i.e. the length of every feature vector.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Location columns in schema order.
    pub fn locations(&self) -> &[String] {
        &self.columns[FIXED_COLUMNS.len()..]
    }

    pub fn sorted_locations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locations().iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Position of a location column. The lookup lowercases `location` and
    /// requires an exact match; the fixed columns are never returned.
    pub fn location_index(&self, location: &str) -> Option<usize> {
        self.location_positions
            .get(&location.to_lowercase())
            .copied()
    }

    /// Name of the location column at `idx`, if `idx` is a location position.
    pub fn location_at(&self, idx: usize) -> Option<&str> {
        if idx < FIXED_COLUMNS.len() {
            return None;
        }
        self.columns.get(idx).map(String::as_str)
    }
}
