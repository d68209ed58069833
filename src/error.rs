use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Local input problems caught before any request is sent.
///
/// The `Display` text is exactly what the user sees in the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter valid square feet.")]
    InvalidSquareFeet,
    #[error("Please select a location!")]
    MissingLocation,
}

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Form input failed local validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Prediction service answered with something we could not use
    #[error("Transport error: {0}")]
    Transport(String),
    /// Prediction service returned a non-2xx status
    #[error("Upstream error ({status}): {body}")]
    UpstreamStatus { status: StatusCode, body: String },
    /// HTTP request error (connection refused, timeout, bad body)
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    /// A required page element is missing
    #[error("Element not found: #{0}")]
    ElementNotFound(String),
    /// Model artifacts could not be loaded
    #[error("Artifact error: {0}")]
    Artifact(String),
    /// Malformed request to the prediction service
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// True for every failure that came from talking to the prediction service.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::UpstreamStatus { .. } | Self::Http(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamStatus { .. } | Self::Http(_) | Self::Transport(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::ElementNotFound(_) | Self::Artifact(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::Validation(_) => "validation_error",
        AppError::Transport(_) => "transport_error",
        AppError::UpstreamStatus { .. } => "upstream_error",
        AppError::Http(_) => "http_request_error",
        AppError::ElementNotFound(_) => "element_not_found",
        AppError::Artifact(_) => "artifact_error",
        AppError::BadRequest(_) => "bad_request",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_alert_text() {
        assert_eq!(
            AppError::from(ValidationError::InvalidSquareFeet).to_string(),
            "Please enter valid square feet."
        );
        assert_eq!(
            AppError::from(ValidationError::MissingLocation).to_string(),
            "Please select a location!"
        );
    }

    #[test]
    fn test_transport_grouping() {
        assert!(AppError::Transport("bad json".to_string()).is_transport());
        assert!(AppError::UpstreamStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        }
        .is_transport());
        assert!(!AppError::from(ValidationError::MissingLocation).is_transport());
        assert!(!AppError::ElementNotFound("uiSqft".to_string()).is_transport());
    }

    #[test]
    fn test_error_type_name() {
        assert_eq!(error_type_name(&AppError::BadRequest("x".to_string())), "bad_request");
        assert_eq!(error_type_name(&AppError::Artifact("x".to_string())), "artifact_error");
    }

    #[tokio::test]
    async fn test_error_response() {
        let response = AppError::BadRequest("missing field bhk".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::Artifact("no model".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
