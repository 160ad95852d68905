//! Repository for the `tenant_sports_mapping` table.

use ctms_core::types::DbId;
use sqlx::{PgPool, QueryBuilder};

use crate::models::mapping::{
    CreateTenantSportMapping, MappingStatus, TenantSportMapping, UpdateTenantSportMapping,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, sport_id, status, created_by, updated_by, \
    description, created_at, updated_at";

/// Provides CRUD and bulk operations for tenant-sport mappings.
pub struct MappingRepo;

impl MappingRepo {
    /// Insert a single mapping, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTenantSportMapping,
    ) -> Result<TenantSportMapping, sqlx::Error> {
        let query = format!(
            "INSERT INTO tenant_sports_mapping
                (tenant_id, sport_id, status, created_by, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TenantSportMapping>(&query)
            .bind(input.tenant_id)
            .bind(input.sport_id)
            .bind(input.status)
            .bind(input.created_by)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Insert a batch of mappings with one multi-row INSERT, so either all
    /// rows appear or none do.
    pub async fn bulk_create(
        pool: &PgPool,
        inputs: &[CreateTenantSportMapping],
    ) -> Result<Vec<TenantSportMapping>, sqlx::Error> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }
        let mut qb = QueryBuilder::new(
            "INSERT INTO tenant_sports_mapping \
             (tenant_id, sport_id, status, created_by, description) ",
        );
        qb.push_values(inputs, |mut row, mapping| {
            row.push_bind(mapping.tenant_id)
                .push_bind(mapping.sport_id)
                .push_bind(mapping.status)
                .push_bind(mapping.created_by)
                .push_bind(mapping.description.clone());
        });
        qb.push(" RETURNING ");
        qb.push(COLUMNS);
        qb.build_query_as::<TenantSportMapping>()
            .fetch_all(pool)
            .await
    }

    /// Find a mapping by its (tenant, sport) pair. A pair can accumulate
    /// rows through unregister/re-register cycles; the active row wins,
    /// falling back to the newest inactive one.
    pub async fn find_by_tenant_and_sport(
        pool: &PgPool,
        tenant_id: DbId,
        sport_id: DbId,
    ) -> Result<Option<TenantSportMapping>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tenant_sports_mapping
             WHERE tenant_id = $1 AND sport_id = $2
             ORDER BY (status = 'active') DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, TenantSportMapping>(&query)
            .bind(tenant_id)
            .bind(sport_id)
            .fetch_optional(pool)
            .await
    }

    /// List all mappings for a tenant, optionally filtered by status.
    pub async fn list_by_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        status: Option<MappingStatus>,
    ) -> Result<Vec<TenantSportMapping>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tenant_sports_mapping
             WHERE tenant_id = $1 AND ($2::mapping_status IS NULL OR status = $2)
             ORDER BY id"
        );
        sqlx::query_as::<_, TenantSportMapping>(&query)
            .bind(tenant_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// List all mappings for a sport, optionally filtered by status.
    pub async fn list_by_sport(
        pool: &PgPool,
        sport_id: DbId,
        status: Option<MappingStatus>,
    ) -> Result<Vec<TenantSportMapping>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tenant_sports_mapping
             WHERE sport_id = $1 AND ($2::mapping_status IS NULL OR status = $2)
             ORDER BY id"
        );
        sqlx::query_as::<_, TenantSportMapping>(&query)
            .bind(sport_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Count active mappings for a tenant among the given sport ids with a
    /// single query. A nonzero count aborts bulk registration.
    pub async fn count_active_for_sports(
        pool: &PgPool,
        tenant_id: DbId,
        sport_ids: &[DbId],
    ) -> Result<i64, sqlx::Error> {
        if sport_ids.is_empty() {
            return Ok(0);
        }
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM tenant_sports_mapping
             WHERE tenant_id = $1 AND sport_id = ANY($2) AND status = 'active'",
        )
        .bind(tenant_id)
        .bind(sport_ids)
        .fetch_one(pool)
        .await
    }

    /// Update a mapping. Only provided fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTenantSportMapping,
    ) -> Result<Option<TenantSportMapping>, sqlx::Error> {
        let query = format!(
            "UPDATE tenant_sports_mapping SET
                status = COALESCE($2, status),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                updated_by = COALESCE($5, updated_by),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TenantSportMapping>(&query)
            .bind(id)
            .bind(input.status)
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }
}
