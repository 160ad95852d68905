use axum::extract::{Path, Query, State};
use axum::Json;

use ctms_core::types::DbId;
use ctms_db::models::mapping::{
    BulkRegisterSports, MappingListQuery, TenantSportMapping, UpdateTenantSportMapping,
};

use crate::error::AppResult;
use crate::response::{ApiResponse, Envelope};
use crate::services::MappingService;
use crate::state::AppState;

/// `POST /tenant/{id}/sports`
pub async fn register(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(request): Json<BulkRegisterSports>,
) -> AppResult<Envelope<Vec<TenantSportMapping>>> {
    let mappings = MappingService::register_sports(&state.pool, id, request).await?;
    Ok(ApiResponse::created(mappings))
}

/// `GET /tenant/{id}/sports`
pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<MappingListQuery>,
) -> AppResult<Envelope<Vec<TenantSportMapping>>> {
    let mappings = MappingService::list_for_tenant(&state.pool, id, query).await?;
    Ok(ApiResponse::ok(mappings))
}

/// `PUT /tenant/{id}/sports/{sport_id}`
pub async fn update(
    State(state): State<AppState>,
    Path((id, sport_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateTenantSportMapping>,
) -> AppResult<Envelope<TenantSportMapping>> {
    let mapping = MappingService::update_for_tenant(&state.pool, id, sport_id, input).await?;
    Ok(ApiResponse::ok_with_msg(mapping, "Mapping updated successfully"))
}
