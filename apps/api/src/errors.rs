use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::water_jug::models::SolveError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Solver error: {0}")]
    Solve(#[from] SolveError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(path) => (StatusCode::NOT_FOUND, format!("Not found: {path}")),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Solve(SolveError::InvalidInput(msg) | SolveError::Infeasible(msg)) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Solve(SolveError::ResourceExceeded(msg)) => {
                tracing::warn!("Solver gave up: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
