//! HTTP error responses.
//!
//! Every failure maps to a JSON body of the form
//! `{"error": <headline>, "details": <specifics>}` with a non-2xx status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use farmmart_assist::AssistError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// A required field was missing from the request.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A query parameter could not be interpreted.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No product with the given id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The upload could not be read or spooled.
    #[error("Failed to read upload: {0}")]
    Upload(String),

    /// No generative model is configured.
    #[error("Assistant is not configured")]
    AssistantUnavailable,

    /// The generative model call failed.
    #[error(transparent)]
    Upstream(#[from] AssistError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::InvalidParameter(_) | ApiError::Upload(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AssistantUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn headline(&self) -> &'static str {
        match self {
            ApiError::MissingField(_) => "Invalid request",
            ApiError::InvalidParameter(_) => "Invalid request",
            ApiError::ProductNotFound(_) => "Product not found",
            ApiError::Upload(_) => "Invalid upload",
            ApiError::AssistantUnavailable => "Assistant unavailable",
            ApiError::Upstream(_) => "Failed to generate response",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.headline(),
            "details": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::MissingField("message").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ProductNotFound("99".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::AssistantUnavailable.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Upstream(AssistError::EmptyResponse).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_upstream_response_shape() {
        let response = ApiError::Upstream(AssistError::EmptyResponse).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_headline_matches_original_wording() {
        assert_eq!(
            ApiError::Upstream(AssistError::EmptyResponse).headline(),
            "Failed to generate response"
        );
    }
}
