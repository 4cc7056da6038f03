use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::error_payload::ErrorPayload;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("An error occurred while processing the request")]
    RequestError(#[from] reqwest::Error),

    #[error("{service} responded with status {status}")]
    UpstreamStatus { service: &'static str, status: u16 },

    #[error("Unexpected response body: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Sentiment estimator failed: {0}")]
    SentimentError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to render page")]
    TemplateError(#[from] askama::Error),

    #[error("Internal server error")]
    InternalServerError(),
}

impl AppError {
    pub fn code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RequestError(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
            AppError::DecodeError(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidPayload(_) => StatusCode::BAD_GATEWAY,
            AppError::SentimentError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidConfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError() => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> String {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::RequestError(_) => "REQUEST_ERROR",
            AppError::UpstreamStatus { .. } => "UPSTREAM_STATUS",
            AppError::DecodeError(_) => "DECODE_ERROR",
            AppError::InvalidPayload(_) => "INVALID_PAYLOAD",
            AppError::SentimentError(_) => "SENTIMENT_ERROR",
            AppError::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            AppError::TemplateError(_) => "TEMPLATE_ERROR",
            AppError::InternalServerError() => "INTERNAL_SERVER_ERROR",
        }
        .to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code();
        let error_response = ErrorPayload {
            message: self.to_string(),
            code: status.as_u16(),
            r#type: self.error_type(),
            details: None,
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_map_to_bad_gateway() {
        let err = AppError::UpstreamStatus {
            service: "coingecko",
            status: 429,
        };
        assert_eq!(err.code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "coingecko responded with status 429");
    }

    #[test]
    fn into_response_keeps_status() {
        let response = AppError::BadRequest("timeframe".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
