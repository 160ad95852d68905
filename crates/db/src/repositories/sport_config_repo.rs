//! Repository for the `sports_config` table.

use ctms_core::types::DbId;
use sqlx::PgPool;

use crate::models::sport_config::{CreateSportConfig, SportConfig, UpdateSportConfig};
use crate::repositories::base::{self, Entity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sport_id, config_data, status, created_by, description, \
    created_at, updated_at";

impl Entity for SportConfig {
    const TABLE: &'static str = "sports_config";
    const COLUMNS: &'static str = COLUMNS;
}

/// Provides CRUD operations for per-sport configs.
pub struct SportConfigRepo;

impl SportConfigRepo {
    /// Insert a config under a sport. If `status` is `None`, defaults to
    /// active.
    pub async fn create(
        pool: &PgPool,
        sport_id: DbId,
        input: &CreateSportConfig,
    ) -> Result<SportConfig, sqlx::Error> {
        let query = format!(
            "INSERT INTO sports_config
                (sport_id, config_data, status, created_by, description)
             VALUES ($1, $2, COALESCE($3, 'active'), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SportConfig>(&query)
            .bind(sport_id)
            .bind(&input.config_data)
            .bind(input.status)
            .bind(input.created_by)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a config by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SportConfig>, sqlx::Error> {
        base::find_by_id::<SportConfig>(pool, id).await
    }

    /// List all configs for a sport.
    pub async fn list_by_sport(
        pool: &PgPool,
        sport_id: DbId,
    ) -> Result<Vec<SportConfig>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sports_config WHERE sport_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, SportConfig>(&query)
            .bind(sport_id)
            .fetch_all(pool)
            .await
    }

    /// Update a config. Only provided fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSportConfig,
    ) -> Result<Option<SportConfig>, sqlx::Error> {
        let query = format!(
            "UPDATE sports_config SET
                config_data = CASE WHEN $2 THEN $3 ELSE config_data END,
                status = COALESCE($4, status),
                description = CASE WHEN $5 THEN $6 ELSE description END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SportConfig>(&query)
            .bind(id)
            .bind(input.config_data.is_some())
            .bind(input.config_data.clone().flatten())
            .bind(input.status)
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a config by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        base::hard_delete::<SportConfig>(pool, id).await
    }
}
