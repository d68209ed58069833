use crate::{
    config::ServiceConfig,
    error::AppError,
    models::{EstimateResponse, LocationsResponse, PredictionForm},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// The remote prediction service as seen by the form.
#[async_trait]
pub trait PredictionApi: Send + Sync + 'static {
    /// `GET /get_location_names`
    async fn location_names(&self) -> Result<Vec<String>, AppError>;

    /// `POST /predict_home_price`
    async fn predict_home_price(&self, form: &PredictionForm) -> Result<f64, AppError>;
}

/// reqwest-backed client for the prediction service
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpPredictionClient {
    pub fn new(client: Client, config: &ServiceConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout_seconds.map(Duration::from_secs),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(Client::new(), config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn with_timeout(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.timeout {
            Some(timeout) => req.timeout(timeout),
            None => req,
        }
    }
}

#[async_trait]
impl PredictionApi for HttpPredictionClient {
    async fn location_names(&self) -> Result<Vec<String>, AppError> {
        let url = self.url("get_location_names");
        debug!(url = %url, "Fetching location names");

        let response = self.with_timeout(self.client.get(&url)).send().await?;
        let body: LocationsResponse = decode(response).await?;

        Ok(body.locations)
    }

    async fn predict_home_price(&self, form: &PredictionForm) -> Result<f64, AppError> {
        let url = self.url("predict_home_price");
        debug!(
            url = %url,
            total_sqft = form.total_sqft,
            bhk = form.bhk,
            bath = form.bath,
            location = %form.location,
            "Requesting price estimate"
        );

        let response = self
            .with_timeout(self.client.post(&url))
            .form(form)
            .send()
            .await?;
        let body: EstimateResponse = decode(response).await?;

        Ok(body.estimated_price)
    }
}

/// Check the status and parse the JSON body.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::UpstreamStatus { status, body });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Transport(format!("malformed response body: {}", e)))
}
