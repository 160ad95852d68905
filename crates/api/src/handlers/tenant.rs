use axum::extract::{Path, Query, State};
use axum::Json;

use ctms_core::pagination::Page;
use ctms_core::types::DbId;
use ctms_db::models::tenant::{CreateTenant, Tenant, TenantListQuery, UpdateTenant};

use crate::error::AppResult;
use crate::response::{ApiResponse, Envelope};
use crate::services::TenantService;
use crate::state::AppState;

use super::DeleteParams;

/// `POST /tenant`
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTenant>,
) -> AppResult<Envelope<Tenant>> {
    let tenant = TenantService::create(&state.pool, input).await?;
    Ok(ApiResponse::created(tenant))
}

/// `GET /tenant`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<TenantListQuery>,
) -> AppResult<Envelope<Page<Tenant>>> {
    let page = TenantService::list(&state.pool, query).await?;
    Ok(ApiResponse::ok(page))
}

/// `GET /tenant/{id}`
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Envelope<Tenant>> {
    let tenant = TenantService::get(&state.pool, id).await?;
    Ok(ApiResponse::ok(tenant))
}

/// `GET /tenant/code/{code}`
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Envelope<Tenant>> {
    let tenant = TenantService::get_by_code(&state.pool, &code).await?;
    Ok(ApiResponse::ok(tenant))
}

/// `PUT /tenant/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTenant>,
) -> AppResult<Envelope<Tenant>> {
    let tenant = TenantService::update(&state.pool, id, input).await?;
    Ok(ApiResponse::ok_with_msg(tenant, "Tenant updated successfully"))
}

/// `DELETE /tenant/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<DeleteParams>,
) -> AppResult<Envelope<Tenant>> {
    let tenant = TenantService::delete(&state.pool, id, params.soft_delete).await?;
    Ok(ApiResponse::ok_with_msg(tenant, "Tenant deleted successfully"))
}
