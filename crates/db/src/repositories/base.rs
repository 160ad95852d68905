//! Table-generic storage operations and filter/pagination composition.
//!
//! Entity repositories instantiate these free functions with their row type
//! instead of repeating id-keyed SQL per table. Absence is always reported
//! as a normal value (`Option` / `bool`), never as an error; interpreting it
//! is the service layer's job.

use ctms_core::pagination::Page;
use ctms_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// A persisted entity type backed by a single table.
///
/// `COLUMNS` is the shared column list used by every query that returns
/// rows, so the `FromRow` impl and the SQL can never drift apart.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const TABLE: &'static str;
    const COLUMNS: &'static str;
}

/// A composable WHERE-clause for one entity's list queries.
///
/// `push` appends boolean predicates to a builder that already contains
/// `WHERE `. The same implementation is applied verbatim to both the data
/// query and the count query by [`fetch_page`], which is what keeps
/// `total_count` and the fetched rows in agreement. Implementations must
/// never push ORDER BY, OFFSET, or LIMIT.
pub trait Filter {
    fn push(&self, qb: &mut QueryBuilder<'_, Postgres>);
}

/// Fetch one page of rows plus the total count for an identical filter set.
///
/// Skip and limit are applied only to the data query; the count query sees
/// the bare filtered set. Rows are ordered by `id` so OFFSET pagination is
/// deterministic.
pub async fn fetch_page<E, F>(
    pool: &PgPool,
    filter: &F,
    skip: i64,
    limit: i64,
) -> Result<Page<E>, sqlx::Error>
where
    E: Entity,
    F: Filter,
{
    let mut count = QueryBuilder::new(format!("SELECT COUNT(*) FROM {} WHERE ", E::TABLE));
    filter.push(&mut count);
    let total_count: i64 = count.build_query_scalar().fetch_one(pool).await?;

    let mut data = QueryBuilder::new(format!(
        "SELECT {} FROM {} WHERE ",
        E::COLUMNS,
        E::TABLE
    ));
    filter.push(&mut data);
    data.push(" ORDER BY id OFFSET ");
    data.push_bind(skip);
    data.push(" LIMIT ");
    data.push_bind(limit);
    let items = data.build_query_as::<E>().fetch_all(pool).await?;

    Ok(Page::new(items, total_count, skip, limit))
}

/// Find a row by primary key. Soft-deleted rows are included; callers that
/// must hide them check `is_deleted` themselves.
pub async fn find_by_id<E: Entity>(pool: &PgPool, id: DbId) -> Result<Option<E>, sqlx::Error> {
    let sql = format!("SELECT {} FROM {} WHERE id = $1", E::COLUMNS, E::TABLE);
    sqlx::query_as::<_, E>(&sql).bind(id).fetch_optional(pool).await
}

/// Mark a row deleted. Returns `false` when the id is absent or the row is
/// already soft-deleted. Only valid for tables with an `is_deleted` column.
pub async fn soft_delete<E: Entity>(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
    let sql = format!(
        "UPDATE {} SET is_deleted = TRUE, updated_at = NOW() \
         WHERE id = $1 AND is_deleted = FALSE",
        E::TABLE
    );
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// Permanently remove a row. Returns `false` when the id is absent.
pub async fn hard_delete<E: Entity>(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
    let sql = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
