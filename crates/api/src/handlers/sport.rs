use axum::extract::{Path, Query, State};
use axum::Json;

use ctms_core::pagination::Page;
use ctms_core::types::DbId;
use ctms_db::models::sport::{CreateSport, Sport, SportListQuery, UpdateSport};
use ctms_db::models::sport_config::{CreateSportConfig, SportConfig, UpdateSportConfig};

use crate::error::AppResult;
use crate::response::{ApiResponse, Envelope};
use crate::services::{SportConfigService, SportService};
use crate::state::AppState;

use super::DeleteParams;

/// `POST /sport`
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSport>,
) -> AppResult<Envelope<Sport>> {
    let sport = SportService::create(&state.pool, input).await?;
    Ok(ApiResponse::created(sport))
}

/// `GET /sport`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SportListQuery>,
) -> AppResult<Envelope<Page<Sport>>> {
    let page = SportService::list(&state.pool, query).await?;
    Ok(ApiResponse::ok(page))
}

/// `GET /sport/{id}`
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Envelope<Sport>> {
    let sport = SportService::get(&state.pool, id).await?;
    Ok(ApiResponse::ok(sport))
}

/// `GET /sport/code/{code}`
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Envelope<Sport>> {
    let sport = SportService::get_by_code(&state.pool, &code).await?;
    Ok(ApiResponse::ok(sport))
}

/// `PUT /sport/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSport>,
) -> AppResult<Envelope<Sport>> {
    let sport = SportService::update(&state.pool, id, input).await?;
    Ok(ApiResponse::ok_with_msg(sport, "Sport updated successfully"))
}

/// `DELETE /sport/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<DeleteParams>,
) -> AppResult<Envelope<Sport>> {
    let sport = SportService::delete(&state.pool, id, params.soft_delete).await?;
    Ok(ApiResponse::ok_with_msg(sport, "Sport deleted successfully"))
}

/// `POST /sport/{id}/configs`
pub async fn create_config(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateSportConfig>,
) -> AppResult<Envelope<SportConfig>> {
    let config = SportConfigService::create(&state.pool, id, input).await?;
    Ok(ApiResponse::created(config))
}

/// `GET /sport/{id}/configs`
pub async fn list_configs(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Envelope<Vec<SportConfig>>> {
    let configs = SportConfigService::list(&state.pool, id).await?;
    Ok(ApiResponse::ok(configs))
}

/// `PUT /sport/{id}/configs/{config_id}`
pub async fn update_config(
    State(state): State<AppState>,
    Path((id, config_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateSportConfig>,
) -> AppResult<Envelope<SportConfig>> {
    let config = SportConfigService::update(&state.pool, id, config_id, input).await?;
    Ok(ApiResponse::ok_with_msg(config, "Config updated successfully"))
}

/// `DELETE /sport/{id}/configs/{config_id}`
pub async fn delete_config(
    State(state): State<AppState>,
    Path((id, config_id)): Path<(DbId, DbId)>,
) -> AppResult<Envelope<SportConfig>> {
    let config = SportConfigService::delete(&state.pool, id, config_id).await?;
    Ok(ApiResponse::ok_with_msg(config, "Config deleted successfully"))
}
