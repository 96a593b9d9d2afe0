use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Store failure whose message is safe to hand to the caller.
    #[error("Store error: {0}")]
    Store(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// The store's own message, without the driver's wrapper text.
pub fn store_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db) => db.message().to_string(),
        sqlx::Error::Protocol(msg) => msg.clone(),
        other => other.to_string(),
    }
}

impl AppError {
    /// Classifies a store failure; `expose` decides whether clients see the raw message.
    pub fn from_store(err: sqlx::Error, expose: bool) -> Self {
        if expose {
            AppError::Store(err)
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, store_message(e))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
