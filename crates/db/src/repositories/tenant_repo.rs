//! Repository for the `tenants` table.

use ctms_core::pagination::{clamp_limit, clamp_skip, like_pattern, Page, DEFAULT_LIMIT, MAX_LIMIT};
use ctms_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::tenant::{CreateTenant, Tenant, TenantListQuery, UpdateTenant};
use crate::repositories::base::{self, Entity, Filter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, tenant_code, logo, address, tenant_uuid, email, \
    description, status, created_at, updated_at, is_deleted";

impl Entity for Tenant {
    const TABLE: &'static str = "tenants";
    const COLUMNS: &'static str = COLUMNS;
}

/// WHERE-clause composition for tenant list queries. Applied identically to
/// the data and count queries by `base::fetch_page`.
struct TenantFilter<'a> {
    query: &'a TenantListQuery,
    pattern: Option<String>,
}

impl<'a> TenantFilter<'a> {
    fn new(query: &'a TenantListQuery) -> Self {
        let pattern = query.search.as_deref().map(like_pattern);
        Self { query, pattern }
    }
}

impl Filter for TenantFilter<'_> {
    fn push(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        if self.query.include_deleted {
            qb.push("TRUE");
        } else {
            qb.push("is_deleted = FALSE");
        }
        if let Some(status) = self.query.status {
            qb.push(" AND status = ").push_bind(status);
        }
        if let Some(id) = self.query.search_id {
            qb.push(" AND id = ").push_bind(id);
        }
        if let Some(pattern) = &self.pattern {
            qb.push(" AND (name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR tenant_code ILIKE ")
                .push_bind(pattern.clone())
                .push(")");
        }
    }
}

/// Provides CRUD operations for tenants.
pub struct TenantRepo;

impl TenantRepo {
    /// Insert a new tenant, returning the created row.
    ///
    /// If `tenant_uuid` is `None` the database generates one. If `status`
    /// is `None`, defaults to active.
    pub async fn create(pool: &PgPool, input: &CreateTenant) -> Result<Tenant, sqlx::Error> {
        let query = format!(
            "INSERT INTO tenants
                (name, tenant_code, logo, address, tenant_uuid, email, description, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, gen_random_uuid()), $6, $7,
                     COALESCE($8, 'active'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(&input.name)
            .bind(&input.tenant_code)
            .bind(&input.logo)
            .bind(&input.address)
            .bind(input.tenant_uuid)
            .bind(&input.email)
            .bind(&input.description)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a tenant by its internal ID. Includes soft-deleted rows; the
    /// service layer decides whether a deleted row counts as found.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tenant>, sqlx::Error> {
        base::find_by_id::<Tenant>(pool, id).await
    }

    /// Find a tenant by its unique code (soft-deleted rows included, so the
    /// duplicate check on create also catches deleted codes).
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE tenant_code = $1");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Find a tenant by its UUID.
    pub async fn find_by_uuid(pool: &PgPool, uuid: Uuid) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE tenant_uuid = $1");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(uuid)
            .fetch_optional(pool)
            .await
    }

    /// List tenants with pagination and filters.
    pub async fn list(pool: &PgPool, query: &TenantListQuery) -> Result<Page<Tenant>, sqlx::Error> {
        let skip = clamp_skip(query.skip);
        let limit = clamp_limit(query.limit, DEFAULT_LIMIT, MAX_LIMIT);
        base::fetch_page(pool, &TenantFilter::new(query), skip, limit).await
    }

    /// Update a tenant. Only provided fields are applied; tagged-presence
    /// fields allow clearing nullable columns with an explicit null.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTenant,
    ) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!(
            "UPDATE tenants SET
                name = COALESCE($2, name),
                tenant_code = COALESCE($3, tenant_code),
                logo = CASE WHEN $4 THEN $5 ELSE logo END,
                address = CASE WHEN $6 THEN $7 ELSE address END,
                email = CASE WHEN $8 THEN $9 ELSE email END,
                description = CASE WHEN $10 THEN $11 ELSE description END,
                status = COALESCE($12, status),
                updated_at = NOW()
             WHERE id = $1 AND is_deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.tenant_code)
            .bind(input.logo.is_some())
            .bind(input.logo.clone().flatten())
            .bind(input.address.is_some())
            .bind(input.address.clone().flatten())
            .bind(input.email.is_some())
            .bind(input.email.clone().flatten())
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a tenant by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        base::soft_delete::<Tenant>(pool, id).await
    }

    /// Permanently delete a tenant by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        base::hard_delete::<Tenant>(pool, id).await
    }
}
