use axum::{
    extract::{rejection::FormRejection, State},
    response::IntoResponse,
    Form, Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    artifacts::PriceModel,
    error::AppError,
    models::{EstimateResponse, LocationsResponse, PredictionForm},
};

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<PriceModel>,
}

/// Handle /get_location_names
pub async fn get_location_names(State(state): State<AppState>) -> Json<LocationsResponse> {
    debug!("Serving location names");
    Json(LocationsResponse {
        locations: state.model.location_names().to_vec(),
    })
}

/// Handle /predict_home_price
pub async fn predict_home_price(
    State(state): State<AppState>,
    form: Result<Form<PredictionForm>, FormRejection>,
) -> Result<Json<EstimateResponse>, AppError> {
    let Form(form) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;
    if !form.total_sqft.is_finite() {
        return Err(AppError::BadRequest(format!(
            "total_sqft must be a finite number, got {}",
            form.total_sqft
        )));
    }

    let estimated_price = state
        .model
        .estimate(&form.location, form.total_sqft, form.bhk, form.bath);
    if !estimated_price.is_finite() {
        warn!(location = %form.location, "Model produced a non-finite estimate");
        return Err(AppError::Artifact(
            "model produced a non-finite estimate".to_string(),
        ));
    }
    info!(
        location = %form.location,
        total_sqft = form.total_sqft,
        bhk = form.bhk,
        bath = form.bath,
        estimated_price,
        "Price estimated"
    );

    Ok(Json(EstimateResponse { estimated_price }))
}

/// Handle /health
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
