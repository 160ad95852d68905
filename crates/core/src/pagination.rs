//! Pagination constants and helpers shared by the repository and API layers.

use serde::Serialize;

/// Default number of rows per page when the caller sends no `limit`.
pub const DEFAULT_LIMIT: i64 = 100;

/// Hard ceiling on rows per page.
pub const MAX_LIMIT: i64 = 1000;

/// Clamp a requested limit into `1..=max` with a default for `None`.
///
/// # Examples
///
/// ```
/// use ctms_core::pagination::clamp_limit;
/// assert_eq!(clamp_limit(None, 100, 1000), 100);
/// assert_eq!(clamp_limit(Some(0), 100, 1000), 1);
/// assert_eq!(clamp_limit(Some(5000), 100, 1000), 1000);
/// ```
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a requested skip to be non-negative.
///
/// # Examples
///
/// ```
/// use ctms_core::pagination::clamp_skip;
/// assert_eq!(clamp_skip(None), 0);
/// assert_eq!(clamp_skip(Some(-5)), 0);
/// assert_eq!(clamp_skip(Some(40)), 40);
/// ```
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}

/// Escape `%`, `_`, and `\` in user input destined for an ILIKE pattern,
/// then wrap it in `%...%` for substring matching.
///
/// # Examples
///
/// ```
/// use ctms_core::pagination::like_pattern;
/// assert_eq!(like_pattern("ten"), "%ten%");
/// assert_eq!(like_pattern("50%"), "%50\\%%");
/// ```
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// One page of results plus the bookkeeping list endpoints return.
///
/// `total_count` is the number of rows matching the filter set ignoring
/// skip/limit; `has_next_page` is derived, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub has_next_page: bool,
    pub skip: i64,
    pub limit: i64,
}

impl<T> Page<T> {
    /// Assemble a page, computing `has_next_page = skip + len < total_count`.
    pub fn new(items: Vec<T>, total_count: i64, skip: i64, limit: i64) -> Self {
        let has_next_page = skip + (items.len() as i64) < total_count;
        Self {
            items,
            total_count,
            has_next_page,
            skip,
            limit,
        }
    }
}
