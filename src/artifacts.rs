//! Price model used by the bundled prediction service.
//!
//! Two JSON artifacts live in one directory:
//! - `columns.json`: `{"data_columns": ["total_sqft", "bath", "bhk", <locations>...]}`
//! - `model.json`: `{"intercept": f64, "coefficients": [f64, ...]}`, one
//!   coefficient per data column
//!
//! Location columns are one-hot features, stored lowercase.

use crate::error::AppError;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

pub const COLUMNS_FILE: &str = "columns.json";
pub const MODEL_FILE: &str = "model.json";

/// sqft, bath, bhk come before the location columns
const NUMERIC_COLUMNS: usize = 3;

#[derive(Debug, Deserialize)]
struct ColumnsFile {
    data_columns: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ModelFile {
    intercept: f64,
    coefficients: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct PriceModel {
    data_columns: Vec<String>,
    intercept: f64,
    coefficients: Vec<f64>,
}

impl PriceModel {
    pub fn new(
        data_columns: Vec<String>,
        intercept: f64,
        coefficients: Vec<f64>,
    ) -> Result<Self, AppError> {
        if data_columns.len() < NUMERIC_COLUMNS {
            return Err(AppError::Artifact(format!(
                "expected at least {} data columns, found {}",
                NUMERIC_COLUMNS,
                data_columns.len()
            )));
        }
        if coefficients.len() != data_columns.len() {
            return Err(AppError::Artifact(format!(
                "model has {} coefficients for {} data columns",
                coefficients.len(),
                data_columns.len()
            )));
        }

        Ok(Self {
            data_columns,
            intercept,
            coefficients,
        })
    }

    /// Load `columns.json` and `model.json` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        info!(dir = %dir.display(), "Loading saved artifacts");

        let columns: ColumnsFile = read_json(&dir.join(COLUMNS_FILE))?;
        let model: ModelFile = read_json(&dir.join(MODEL_FILE))?;
        let model = Self::new(columns.data_columns, model.intercept, model.coefficients)?;

        info!(locations = model.location_names().len(), "Artifacts loaded");
        Ok(model)
    }

    /// Location columns, in artifact order
    pub fn location_names(&self) -> &[String] {
        &self.data_columns[NUMERIC_COLUMNS..]
    }

    /// Estimated price in lakh, rounded to two decimals.
    ///
    /// An unknown location adds nothing to the linear sum.
    pub fn estimate(&self, location: &str, sqft: f64, bhk: i32, bath: i32) -> f64 {
        let location = location.trim().to_lowercase();

        let mut features = vec![0.0; self.data_columns.len()];
        features[0] = sqft;
        features[1] = f64::from(bath);
        features[2] = f64::from(bhk);

        if let Some(index) = self.location_index(&location) {
            features[index] = 1.0;
        }

        let price = self.intercept
            + self
                .coefficients
                .iter()
                .zip(&features)
                .map(|(c, x)| c * x)
                .sum::<f64>();

        round2(price)
    }

    fn location_index(&self, location: &str) -> Option<usize> {
        self.data_columns
            .iter()
            .skip(NUMERIC_COLUMNS)
            .position(|column| column == location)
            .map(|i| i + NUMERIC_COLUMNS)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Artifact(format!("cannot read {}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Artifact(format!("cannot parse {}: {}", path.display(), e)))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
