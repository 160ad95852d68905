use axum::extract::State;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::response::{ApiResponse, Envelope};
use crate::state::AppState;

/// `GET /` welcome message.
pub async fn root() -> Envelope<Value> {
    ApiResponse::ok_with_msg(
        json!({ "message": "Welcome to the CTMS API" }),
        "Service is running",
    )
}

/// `GET /health` liveness check including a database round trip.
pub async fn health(State(state): State<AppState>) -> AppResult<Envelope<Value>> {
    ctms_db::health_check(&state.pool).await?;
    Ok(ApiResponse::ok(json!({ "status": "healthy" })))
}
