use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use movie_info::MovieInfoError;
use reviews::ReviewsError;
use serde::Serialize;
use thiserror::Error;

/// Unified application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Movie-info service error
    #[error("{0}")]
    MovieInfo(#[from] MovieInfoError),

    /// Reviews service error
    #[error("{0}")]
    Reviews(#[from] ReviewsError),
}

/// API error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    /// HTTP status the error maps to. NotFound surfaces as 404, a downstream
    /// 4xx is echoed as-is, and everything else (5xx bodies, transport
    /// failures, unparseable payloads) is a bad gateway.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MovieInfo(MovieInfoError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::MovieInfo(MovieInfoError::Client { status_code, .. })
            | AppError::Reviews(ReviewsError::Client { status_code, .. }) => {
                StatusCode::from_u16(*status_code).unwrap_or(StatusCode::BAD_REQUEST)
            }
            AppError::MovieInfo(_) | AppError::Reviews(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error_message, details) = match &self {
            AppError::MovieInfo(MovieInfoError::NotFound { .. }) => (self.to_string(), None),
            AppError::MovieInfo(MovieInfoError::Client { body, .. })
            | AppError::Reviews(ReviewsError::Client { body, .. }) => {
                ("downstream rejected the request".to_string(), Some(body.clone()))
            }
            AppError::MovieInfo(e) => {
                tracing::error!("Movie info service error: {}", e);
                ("movie info service error".to_string(), Some(e.to_string()))
            }
            AppError::Reviews(e) => {
                tracing::error!("Reviews service error: {}", e);
                ("reviews service error".to_string(), Some(e.to_string()))
            }
        };

        let body = ErrorResponse {
            error: error_message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Convenience alias
pub type AppResult<T> = Result<T, AppError>;
