use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

/// Detail returned to callers for every failed scrape. Causes stay in the logs.
pub const SCRAPE_FAILED_DETAIL: &str = "Failed to scrape the product data";

#[derive(Serialize)]
pub struct ErrorResponse {
    detail: &'static str,
}

/// Why a single scrape could not produce a result.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionFailed {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream responded with status {0}")]
    Status(u16),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ExtractionFailed(#[from] ExtractionFailed),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            detail: SCRAPE_FAILED_DETAIL,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn upstream_status_maps_to_fixed_500() {
        let (status, body) = body_json(ExtractionFailed::Status(404).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "detail": SCRAPE_FAILED_DETAIL }));
    }

    #[tokio::test]
    async fn cause_is_not_leaked_to_caller() {
        let (_, body) = body_json(AppError::Config("PORT=abc".into())).await;
        assert!(!body.to_string().contains("PORT"));
    }

    #[test]
    fn display_keeps_the_cause() {
        let err: AppError = ExtractionFailed::Status(503).into();
        assert_eq!(err.to_string(), "upstream responded with status 503");
    }
}
