//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application error type.
///
/// Only `NotFound` is distinguished on the wire (404). Every storage
/// failure collapses to a generic 500: full detail goes to the log, none
/// of it to the caller. The constraint/database/pool split exists for
/// logs and tests, not for responses.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("constraint violation: {0}")]
    Constraint(tokio_postgres::Error),

    #[error("database error: {0}")]
    Database(tokio_postgres::Error),

    #[error("database pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            err => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<tokio_postgres::Error> for AppError {
    fn from(err: tokio_postgres::Error) -> Self {
        // SQLSTATE class 23 is integrity violations: unique, foreign key,
        // NOT NULL. Kept apart from connectivity and query failures so the
        // operational log says which one happened.
        match err.code() {
            Some(state) if state.code().starts_with("23") => AppError::Constraint(err),
            _ => AppError::Database(err),
        }
    }
}
