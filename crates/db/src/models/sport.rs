//! Sport entity model and DTOs.

use ctms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::{double_option, validate_code};

/// Sport lifecycle status, persisted as the `sport_status` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sport_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SportStatus {
    Active,
    Inactive,
    Suspended,
}

/// Sport category, persisted as the `sport_category` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sport_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SportCategory {
    RacketSports,
    FieldSports,
    MixedSports,
    Other,
}

/// A row from the `sports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sport {
    pub id: DbId,
    pub sport_code: String,
    pub sport_name: String,
    pub category: Option<SportCategory>,
    pub icon_url: Option<String>,
    pub status: SportStatus,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub is_deleted: bool,
}

/// DTO for creating a new sport. `status` defaults to active.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSport {
    #[validate(length(min = 1, max = 10), custom(function = validate_code))]
    pub sport_code: String,
    #[validate(length(min = 1, max = 25))]
    pub sport_name: String,
    pub category: Option<SportCategory>,
    pub icon_url: Option<String>,
    pub status: Option<SportStatus>,
    pub description: Option<String>,
}

/// DTO for updating a sport. Only provided fields are applied; nullable
/// columns use tagged presence so an explicit `null` clears them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSport {
    #[validate(length(min = 1, max = 10), custom(function = validate_code))]
    pub sport_code: Option<String>,
    #[validate(length(min = 1, max = 25))]
    pub sport_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub category: Option<Option<SportCategory>>,
    #[serde(default, deserialize_with = "double_option")]
    pub icon_url: Option<Option<String>>,
    pub status: Option<SportStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

/// Query parameters for `GET /sport`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SportListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<SportStatus>,
    pub category: Option<SportCategory>,
    pub search_id: Option<DbId>,
    pub search: Option<String>,
    #[serde(default)]
    pub include_deleted: bool,
}
