//! Integration tests for sport listing: pagination, filters, and the
//! guarantee that `total_count` always reflects the same filter as the
//! returned items.

use sqlx::PgPool;

use ctms_db::models::sport::{CreateSport, SportCategory, SportListQuery, SportStatus};
use ctms_db::repositories::SportRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_sport(code: &str, name: &str) -> CreateSport {
    CreateSport {
        sport_code: code.to_string(),
        sport_name: name.to_string(),
        category: None,
        icon_url: None,
        status: None,
        description: None,
    }
}

async fn seed_sports(pool: &PgPool, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let sport = SportRepo::create(pool, &new_sport(&format!("SP{i}"), &format!("Sport {i}")))
            .await
            .unwrap();
        ids.push(sport.id);
    }
    ids
}

// ---------------------------------------------------------------------------
// Test: pagination window and total count stay consistent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_pagination_window_and_total(pool: PgPool) {
    seed_sports(&pool, 5).await;

    let query = SportListQuery {
        skip: Some(0),
        limit: Some(2),
        ..Default::default()
    };
    let page = SportRepo::list(&pool, &query).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_count, 5);
    assert!(page.has_next_page);
    assert_eq!(page.skip, 0);
    assert_eq!(page.limit, 2);

    let query = SportListQuery {
        skip: Some(4),
        limit: Some(2),
        ..Default::default()
    };
    let last = SportRepo::list(&pool, &query).await.unwrap();

    assert_eq!(last.items.len(), 1);
    assert_eq!(last.total_count, 5);
    assert!(!last.has_next_page, "last partial page should have no next page");
}

// ---------------------------------------------------------------------------
// Test: results are ordered by id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_ordered_by_id(pool: PgPool) {
    let ids = seed_sports(&pool, 4).await;

    let page = SportRepo::list(&pool, &SportListQuery::default()).await.unwrap();
    let listed: Vec<i64> = page.items.iter().map(|s| s.id).collect();
    assert_eq!(listed, ids);
}

// ---------------------------------------------------------------------------
// Test: search matches name and code, total follows the filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_search_filters_both_name_and_code(pool: PgPool) {
    SportRepo::create(&pool, &new_sport("TEN", "Tennis"))
        .await
        .unwrap();
    SportRepo::create(&pool, &new_sport("PAD", "Padel"))
        .await
        .unwrap();
    SportRepo::create(&pool, &new_sport("SQH", "Squash"))
        .await
        .unwrap();

    // Matches "Tennis" by name.
    let query = SportListQuery {
        search: Some("ten".to_string()),
        ..Default::default()
    };
    let page = SportRepo::list(&pool, &query).await.unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].sport_name, "Tennis");

    // Matches "PAD" by code.
    let query = SportListQuery {
        search: Some("pad".to_string()),
        ..Default::default()
    };
    let page = SportRepo::list(&pool, &query).await.unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].sport_code, "PAD");
}

// ---------------------------------------------------------------------------
// Test: search escapes LIKE wildcards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    SportRepo::create(&pool, &new_sport("PCT", "100% Effort"))
        .await
        .unwrap();
    SportRepo::create(&pool, &new_sport("PLN", "Plain"))
        .await
        .unwrap();

    let query = SportListQuery {
        search: Some("%".to_string()),
        ..Default::default()
    };
    let page = SportRepo::list(&pool, &query).await.unwrap();
    assert_eq!(page.total_count, 1, "a literal % should only match names containing %");
    assert_eq!(page.items[0].sport_code, "PCT");
}

// ---------------------------------------------------------------------------
// Test: status and category filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_status_and_category_filters(pool: PgPool) {
    let mut racket = new_sport("TEN", "Tennis");
    racket.category = Some(SportCategory::RacketSports);
    SportRepo::create(&pool, &racket).await.unwrap();

    let mut inactive = new_sport("FBL", "Football");
    inactive.category = Some(SportCategory::FieldSports);
    inactive.status = Some(SportStatus::Inactive);
    SportRepo::create(&pool, &inactive).await.unwrap();

    let query = SportListQuery {
        status: Some(SportStatus::Inactive),
        ..Default::default()
    };
    let page = SportRepo::list(&pool, &query).await.unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].sport_code, "FBL");

    let query = SportListQuery {
        category: Some(SportCategory::RacketSports),
        ..Default::default()
    };
    let page = SportRepo::list(&pool, &query).await.unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].sport_code, "TEN");
}

// ---------------------------------------------------------------------------
// Test: count_existing ignores soft-deleted sports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_count_existing_ignores_deleted(pool: PgPool) {
    let ids = seed_sports(&pool, 3).await;

    assert_eq!(SportRepo::count_existing(&pool, &ids).await.unwrap(), 3);

    SportRepo::soft_delete(&pool, ids[0]).await.unwrap();
    assert_eq!(SportRepo::count_existing(&pool, &ids).await.unwrap(), 2);

    assert_eq!(SportRepo::count_existing(&pool, &[]).await.unwrap(), 0);
}
