//! Wire types shared by the form client and the prediction service.

use serde::{Deserialize, Serialize};

/// Body of `GET /get_location_names`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

/// Form-encoded body of `POST /predict_home_price`
///
/// `bhk` and `bath` carry -1 when no radio option is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionForm {
    pub total_sqft: f64,
    pub bhk: i32,
    pub bath: i32,
    pub location: String,
}

/// Body of a successful `POST /predict_home_price`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub estimated_price: f64,
}
