//! Tenant-sport mapping model and DTOs.

use ctms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::double_option;

/// Mapping status, persisted as the `mapping_status` Postgres enum.
///
/// Setting a mapping to `inactive` is how a sport is unregistered from a
/// tenant; the row itself is kept for audit purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "mapping_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MappingStatus {
    Active,
    Inactive,
}

/// A row from the `tenant_sports_mapping` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TenantSportMapping {
    pub id: DbId,
    pub tenant_id: DbId,
    pub sport_id: DbId,
    pub status: MappingStatus,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Internal DTO for inserting a mapping row.
#[derive(Debug, Clone)]
pub struct CreateTenantSportMapping {
    pub tenant_id: DbId,
    pub sport_id: DbId,
    pub status: MappingStatus,
    pub created_by: Option<DbId>,
    pub description: Option<String>,
}

/// DTO for updating a mapping (set `status` to inactive to unregister).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTenantSportMapping {
    pub status: Option<MappingStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub updated_by: Option<DbId>,
}

/// One sport in a bulk registration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSportItem {
    pub sport_id: DbId,
    pub description: Option<String>,
}

/// Request body for `POST /tenant/{id}/sports`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BulkRegisterSports {
    #[validate(length(min = 1))]
    pub sports: Vec<RegisterSportItem>,
    pub created_by: Option<DbId>,
}

/// Query parameters for `GET /tenant/{id}/sports`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingListQuery {
    pub status: Option<MappingStatus>,
}
