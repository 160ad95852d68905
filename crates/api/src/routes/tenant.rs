use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{tenant, tenant_sports};
use crate::state::AppState;

/// Mount tenant CRUD and tenant-sport registration routes.
///
/// The static `/code/{code}` segment is registered alongside `/{id}`;
/// Axum matches static segments before dynamic ones.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tenant::create).get(tenant::list))
        .route("/code/{code}", get(tenant::get_by_code))
        .route(
            "/{id}",
            get(tenant::get_by_id)
                .put(tenant::update)
                .delete(tenant::delete),
        )
        .route(
            "/{id}/sports",
            post(tenant_sports::register).get(tenant_sports::list),
        )
        .route("/{id}/sports/{sport_id}", put(tenant_sports::update))
}
