//! Repository for the `sports` table.

use ctms_core::pagination::{clamp_limit, clamp_skip, like_pattern, Page, DEFAULT_LIMIT, MAX_LIMIT};
use ctms_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::sport::{CreateSport, Sport, SportListQuery, UpdateSport};
use crate::repositories::base::{self, Entity, Filter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sport_code, sport_name, category, icon_url, status, \
    description, created_at, updated_at, is_deleted";

impl Entity for Sport {
    const TABLE: &'static str = "sports";
    const COLUMNS: &'static str = COLUMNS;
}

/// WHERE-clause composition for sport list queries. Applied identically to
/// the data and count queries by `base::fetch_page`.
struct SportFilter<'a> {
    query: &'a SportListQuery,
    pattern: Option<String>,
}

impl<'a> SportFilter<'a> {
    fn new(query: &'a SportListQuery) -> Self {
        let pattern = query.search.as_deref().map(like_pattern);
        Self { query, pattern }
    }
}

impl Filter for SportFilter<'_> {
    fn push(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        if self.query.include_deleted {
            qb.push("TRUE");
        } else {
            qb.push("is_deleted = FALSE");
        }
        if let Some(status) = self.query.status {
            qb.push(" AND status = ").push_bind(status);
        }
        if let Some(category) = self.query.category {
            qb.push(" AND category = ").push_bind(category);
        }
        if let Some(id) = self.query.search_id {
            qb.push(" AND id = ").push_bind(id);
        }
        if let Some(pattern) = &self.pattern {
            qb.push(" AND (sport_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR sport_code ILIKE ")
                .push_bind(pattern.clone())
                .push(")");
        }
    }
}

/// Provides CRUD operations for sports.
pub struct SportRepo;

impl SportRepo {
    /// Insert a new sport, returning the created row.
    ///
    /// If `status` is `None`, defaults to active.
    pub async fn create(pool: &PgPool, input: &CreateSport) -> Result<Sport, sqlx::Error> {
        let query = format!(
            "INSERT INTO sports
                (sport_code, sport_name, category, icon_url, status, description)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'active'), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sport>(&query)
            .bind(&input.sport_code)
            .bind(&input.sport_name)
            .bind(input.category)
            .bind(&input.icon_url)
            .bind(input.status)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a sport by its internal ID. Includes soft-deleted rows; the
    /// service layer decides whether a deleted row counts as found.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sport>, sqlx::Error> {
        base::find_by_id::<Sport>(pool, id).await
    }

    /// Find a sport by its unique code (soft-deleted rows included).
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Sport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sports WHERE sport_code = $1");
        sqlx::query_as::<_, Sport>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List sports with pagination and filters.
    pub async fn list(pool: &PgPool, query: &SportListQuery) -> Result<Page<Sport>, sqlx::Error> {
        let skip = clamp_skip(query.skip);
        let limit = clamp_limit(query.limit, DEFAULT_LIMIT, MAX_LIMIT);
        base::fetch_page(pool, &SportFilter::new(query), skip, limit).await
    }

    /// Count how many of the given ids exist as non-deleted sports, using a
    /// single set-membership query. Bulk registration compares this count to
    /// the requested count; a mismatch means at least one id is unknown.
    pub async fn count_existing(pool: &PgPool, ids: &[DbId]) -> Result<i64, sqlx::Error> {
        if ids.is_empty() {
            return Ok(0);
        }
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM sports WHERE id = ANY($1) AND is_deleted = FALSE",
        )
        .bind(ids)
        .fetch_one(pool)
        .await
    }

    /// Update a sport. Only provided fields are applied; tagged-presence
    /// fields allow clearing nullable columns with an explicit null.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSport,
    ) -> Result<Option<Sport>, sqlx::Error> {
        let query = format!(
            "UPDATE sports SET
                sport_code = COALESCE($2, sport_code),
                sport_name = COALESCE($3, sport_name),
                category = CASE WHEN $4 THEN $5 ELSE category END,
                icon_url = CASE WHEN $6 THEN $7 ELSE icon_url END,
                status = COALESCE($8, status),
                description = CASE WHEN $9 THEN $10 ELSE description END,
                updated_at = NOW()
             WHERE id = $1 AND is_deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sport>(&query)
            .bind(id)
            .bind(&input.sport_code)
            .bind(&input.sport_name)
            .bind(input.category.is_some())
            .bind(input.category.flatten())
            .bind(input.icon_url.is_some())
            .bind(input.icon_url.clone().flatten())
            .bind(input.status)
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a sport by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        base::soft_delete::<Sport>(pool, id).await
    }

    /// Permanently delete a sport by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        base::hard_delete::<Sport>(pool, id).await
    }
}
