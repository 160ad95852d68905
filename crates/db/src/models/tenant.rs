//! Tenant entity model and DTOs.

use ctms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::{double_option, validate_code};

/// Tenant lifecycle status, persisted as the `tenant_status` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tenant_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
    Active,
    Inactive,
    Suspended,
    Pending,
    OnHold,
}

/// A row from the `tenants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tenant {
    pub id: DbId,
    pub name: String,
    pub tenant_code: String,
    pub logo: Option<String>,
    pub address: Option<String>,
    pub tenant_uuid: Uuid,
    pub email: Option<String>,
    pub description: Option<String>,
    pub status: TenantStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub is_deleted: bool,
}

/// DTO for creating a new tenant.
///
/// `tenant_uuid` is generated server-side when omitted. `status` defaults
/// to active.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTenant {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 10), custom(function = validate_code))]
    pub tenant_code: String,
    pub logo: Option<String>,
    pub address: Option<String>,
    pub tenant_uuid: Option<Uuid>,
    #[validate(email, length(max = 50))]
    pub email: Option<String>,
    pub description: Option<String>,
    pub status: Option<TenantStatus>,
}

/// DTO for updating a tenant. Only provided fields are applied; nullable
/// columns use tagged presence so an explicit `null` clears them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTenant {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 10), custom(function = validate_code))]
    pub tenant_code: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub logo: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub status: Option<TenantStatus>,
}

/// Query parameters for `GET /tenant`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenantListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<TenantStatus>,
    pub search_id: Option<DbId>,
    pub search: Option<String>,
    #[serde(default)]
    pub include_deleted: bool,
}
