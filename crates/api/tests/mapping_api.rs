//! HTTP-level integration tests for tenant-sport registration endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

async fn create_tenant(pool: &PgPool, code: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/tenant",
            serde_json::json!({"name": format!("Tenant {code}"), "tenant_code": code}),
        )
        .await,
    )
    .await;
    json["data"]["id"].as_i64().unwrap()
}

async fn create_sport(pool: &PgPool, code: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/sport",
            serde_json::json!({"sport_code": code, "sport_name": format!("Sport {code}")}),
        )
        .await,
    )
    .await;
    json["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Bulk registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_register_sports_returns_201_with_all_mappings(pool: PgPool) {
    let tenant_id = create_tenant(&pool, "REG").await;
    let s1 = create_sport(&pool, "TEN").await;
    let s2 = create_sport(&pool, "PAD").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/tenant/{tenant_id}/sports"),
        serde_json::json!({
            "sports": [
                {"sport_id": s1, "description": "main offering"},
                {"sport_id": s2}
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let mappings = json["data"].as_array().unwrap();
    assert_eq!(mappings.len(), 2);
    assert!(mappings.iter().all(|m| m["status"] == "active"));
    assert_eq!(mappings[0]["sport_id"], s1);
    assert_eq!(mappings[0]["description"], "main offering");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_register_with_missing_sport_inserts_nothing(pool: PgPool) {
    let tenant_id = create_tenant(&pool, "PART").await;
    let s1 = create_sport(&pool, "TEN").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/tenant/{tenant_id}/sports"),
        serde_json::json!({"sports": [{"sport_id": s1}, {"sport_id": 999999}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The valid sport must not have been registered either.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/tenant/{tenant_id}/sports")).await).await;
    assert!(json["data"].as_array().unwrap().is_empty(), "batch failure must leave no rows");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_register_soft_deleted_sport_fails_whole_batch(pool: PgPool) {
    let tenant_id = create_tenant(&pool, "SD").await;
    let s1 = create_sport(&pool, "TEN").await;
    let s2 = create_sport(&pool, "PAD").await;

    let app = common::build_test_app(pool.clone());
    common::delete(app, &format!("/sport/{s2}")).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/tenant/{tenant_id}/sports"),
        serde_json::json!({"sports": [{"sport_id": s1}, {"sport_id": s2}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/tenant/{tenant_id}/sports")).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_register_already_active_sport_returns_409(pool: PgPool) {
    let tenant_id = create_tenant(&pool, "DUP").await;
    let s1 = create_sport(&pool, "TEN").await;
    let s2 = create_sport(&pool, "PAD").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/tenant/{tenant_id}/sports"),
        serde_json::json!({"sports": [{"sport_id": s1}]}),
    )
    .await;

    // A batch containing the already-registered sport fails entirely.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/tenant/{tenant_id}/sports"),
        serde_json::json!({"sports": [{"sport_id": s1}, {"sport_id": s2}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/tenant/{tenant_id}/sports")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1, "conflict must not add rows");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_register_for_missing_tenant_returns_404(pool: PgPool) {
    let s1 = create_sport(&pool, "TEN").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/tenant/999999/sports",
        serde_json::json!({"sports": [{"sport_id": s1}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_register_empty_batch_returns_400(pool: PgPool) {
    let tenant_id = create_tenant(&pool, "EMPTY").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/tenant/{tenant_id}/sports"),
        serde_json::json!({"sports": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_register_duplicate_ids_in_batch_returns_400(pool: PgPool) {
    let tenant_id = create_tenant(&pool, "TWIN").await;
    let s1 = create_sport(&pool, "TEN").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/tenant/{tenant_id}/sports"),
        serde_json::json!({"sports": [{"sport_id": s1}, {"sport_id": s1}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Listing and unregistering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_mappings_with_status_filter(pool: PgPool) {
    let tenant_id = create_tenant(&pool, "LIST").await;
    let s1 = create_sport(&pool, "TEN").await;
    let s2 = create_sport(&pool, "PAD").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/tenant/{tenant_id}/sports"),
        serde_json::json!({"sports": [{"sport_id": s1}, {"sport_id": s2}]}),
    )
    .await;

    // Unregister one sport.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/tenant/{tenant_id}/sports/{s2}"),
        serde_json::json!({"status": "inactive"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "inactive");

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get(app, &format!("/tenant/{tenant_id}/sports?status=active")).await,
    )
    .await;
    let active = json["data"].as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["sport_id"], s1);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/tenant/{tenant_id}/sports")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2, "unfiltered list keeps the audit row");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_unregistered_sport_can_be_registered_again(pool: PgPool) {
    let tenant_id = create_tenant(&pool, "AGAIN").await;
    let sport_id = create_sport(&pool, "TEN").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/tenant/{tenant_id}/sports"),
        serde_json::json!({"sports": [{"sport_id": sport_id}]}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/tenant/{tenant_id}/sports/{sport_id}"),
        serde_json::json!({"status": "inactive"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/tenant/{tenant_id}/sports"),
        serde_json::json!({"sports": [{"sport_id": sport_id}]}),
    )
    .await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "inactive mapping should not block re-registration"
    );

    // Unregistering again must hit the new active mapping, not the old
    // audit row.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/tenant/{tenant_id}/sports/{sport_id}"),
        serde_json::json!({"status": "inactive"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "inactive");

    let app = common::build_test_app(pool);
    let json = body_json(
        get(app, &format!("/tenant/{tenant_id}/sports?status=active")).await,
    )
    .await;
    assert!(
        json["data"].as_array().unwrap().is_empty(),
        "second unregister must leave no active mapping"
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_missing_mapping_returns_404(pool: PgPool) {
    let tenant_id = create_tenant(&pool, "NOMAP").await;
    let sport_id = create_sport(&pool, "TEN").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/tenant/{tenant_id}/sports/{sport_id}"),
        serde_json::json!({"status": "inactive"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
