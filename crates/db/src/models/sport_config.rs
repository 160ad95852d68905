//! Per-sport configuration model and DTOs.

use ctms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::double_option;

/// Config status, persisted as the `config_status` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "config_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ConfigStatus {
    Active,
    Inactive,
}

/// A row from the `sports_config` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SportConfig {
    pub id: DbId,
    pub sport_id: DbId,
    pub config_data: Option<serde_json::Value>,
    pub status: ConfigStatus,
    pub created_by: Option<DbId>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a config under a sport (`sport_id` comes from the URL).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSportConfig {
    pub config_data: Option<serde_json::Value>,
    pub status: Option<ConfigStatus>,
    pub created_by: Option<DbId>,
    pub description: Option<String>,
}

/// DTO for updating a config. Only provided fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSportConfig {
    #[serde(default, deserialize_with = "double_option")]
    pub config_data: Option<Option<serde_json::Value>>,
    pub status: Option<ConfigStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}
