use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use ctms_core::error::CoreError;

/// API-level error type. Converts into an HTTP response carrying the
/// standard `{data, msg, status}` envelope with `data` always null.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::NotFoundByCode { .. } => {
                    (StatusCode::NOT_FOUND, core.to_string())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            },
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
        }
    }
}

/// Map database errors onto HTTP statuses. Unique violations (Postgres
/// SQLSTATE 23505) on our `uq_`-prefixed constraints become 409 Conflict
/// instead of leaking as 500s.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".into()),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or_default();
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "A record with the same unique value already exists".into(),
                    );
                }
            }
            tracing::error!(error = %db_err, "database error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
        }
        other => {
            tracing::error!(error = %other, "database error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        let body = json!({
            "data": null,
            "msg": msg,
            "status": status.as_u16(),
        });
        (status, Json(body)).into_response()
    }
}
