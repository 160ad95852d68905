use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Standard response envelope. Every successful endpoint returns
/// `{ "data": <payload>, "msg": <string>, "status": <int> }`; errors
/// produce the same shape with `data: null` (see [`crate::error::AppError`]).
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub msg: String,
    pub status: u16,
}

/// A status code paired with an enveloped JSON body, ready to return
/// from a handler.
pub type Envelope<T> = (StatusCode, Json<ApiResponse<T>>);

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with the default success message.
    pub fn ok(data: T) -> Envelope<T> {
        Self::with_status(StatusCode::OK, data, "Success")
    }

    /// 200 OK with a custom message.
    pub fn ok_with_msg(data: T, msg: &str) -> Envelope<T> {
        Self::with_status(StatusCode::OK, data, msg)
    }

    /// 201 Created.
    pub fn created(data: T) -> Envelope<T> {
        Self::with_status(StatusCode::CREATED, data, "Resource created successfully")
    }

    fn with_status(status: StatusCode, data: T, msg: &str) -> Envelope<T> {
        (
            status,
            Json(ApiResponse {
                data: Some(data),
                msg: msg.to_string(),
                status: status.as_u16(),
            }),
        )
    }
}
