use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Chirp exceeds {max} characters")]
    TooLong { max: usize },

    #[error("Forbidden")]
    Forbidden,

    #[error("Persistence error: {0}")]
    Persistence(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MalformedRequest(reason) => {
                tracing::debug!("Rejecting malformed request: {reason}");
                (StatusCode::BAD_REQUEST, "Something went wrong")
            }
            AppError::TooLong { .. } => (StatusCode::BAD_REQUEST, "Chirp is too long"),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Reset is only allowed in dev environment",
            ),
            AppError::Persistence(e) => {
                tracing::error!("Persistence error: {e:?}");
                (StatusCode::BAD_REQUEST, "Something went wrong")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::MalformedRequest(e.to_string())
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::MalformedRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_malformed_request_body() {
        let (status, body) = render(AppError::MalformedRequest("eof".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Something went wrong" }));
    }

    #[tokio::test]
    async fn test_too_long_body() {
        let (status, body) = render(AppError::TooLong { max: 140 }).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Chirp is too long" }));
    }

    #[tokio::test]
    async fn test_forbidden_status() {
        let (status, _) = render(AppError::Forbidden).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_persistence_maps_to_bad_request() {
        let (status, body) = render(AppError::Persistence(anyhow::anyhow!("db down"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Something went wrong");
    }
}
